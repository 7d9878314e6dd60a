//! Domain Value Objects

pub mod account_password;
pub mod apartment_name;
pub mod flat_number;
pub mod month;
pub mod waste_amount;

pub use account_password::{AccountPassword, RawPassword};
pub use apartment_name::ApartmentName;
pub use flat_number::FlatNumber;
pub use month::Month;
pub use waste_amount::WasteAmount;

/// Typed entity IDs from the shared kernel
pub use kernel::id::{ApartmentId, ResidentId, WasteRecordId};
