//! Application Layer
//!
//! Use cases and application services.

pub mod apartment_dashboard;
pub mod config;
pub mod log_waste;
pub mod login_apartment;
pub mod login_resident;
pub mod register_apartment;
pub mod register_resident;
pub mod resident_dashboard;

// Re-exports
pub use apartment_dashboard::ApartmentDashboardUseCase;
pub use config::WasteConfig;
pub use log_waste::{LogWasteInput, LogWasteUseCase};
pub use login_apartment::{LoginApartmentInput, LoginApartmentUseCase};
pub use login_resident::{LoginResidentInput, LoginResidentUseCase};
pub use register_apartment::{RegisterApartmentInput, RegisterApartmentUseCase};
pub use register_resident::{RegisterResidentInput, RegisterResidentUseCase};
pub use resident_dashboard::{MonthlyTotal, ResidentDashboardUseCase};
