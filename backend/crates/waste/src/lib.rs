//! Waste Tracking Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Apartment (tenant) registration/login with name + password
//! - Resident registration/login scoped by apartment and flat number
//! - Append-only monthly waste records, seeded at resident creation
//! - Per-month aggregation for residents and whole apartments
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application pepper
//! - Unknown identity and wrong password are indistinguishable to callers
//! - Credential material never appears in response payloads

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

mod tests;

// Re-exports for convenience
pub use application::config::WasteConfig;
pub use error::{WasteError, WasteResult};
pub use infra::postgres::PgWasteRepository;
pub use presentation::router::waste_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgWasteRepository as WasteStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
