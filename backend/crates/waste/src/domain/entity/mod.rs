//! Domain Entities

pub mod apartment;
pub mod resident;
pub mod waste_record;

pub use apartment::Apartment;
pub use resident::Resident;
pub use waste_record::WasteRecord;
