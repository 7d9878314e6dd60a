//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::WasteAppState;
pub use router::{waste_router, waste_router_generic};
