//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{apartment::Apartment, resident::Resident, waste_record::WasteRecord};
pub use repository::{ApartmentRepository, ResidentRepository, WasteRecordRepository};
