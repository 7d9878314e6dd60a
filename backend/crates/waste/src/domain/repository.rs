//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{apartment::Apartment, resident::Resident, waste_record::WasteRecord};
use crate::domain::value_object::{
    ApartmentId, ApartmentName, FlatNumber, Month, ResidentId,
};
use crate::error::WasteResult;

/// Apartment repository trait
#[trait_variant::make(ApartmentRepository: Send)]
pub trait LocalApartmentRepository {
    /// Create a new apartment
    async fn create(&self, apartment: &Apartment) -> WasteResult<()>;

    /// Find apartment by ID
    async fn find_by_id(&self, apartment_id: &ApartmentId) -> WasteResult<Option<Apartment>>;

    /// Find apartment by name (canonical form)
    async fn find_by_name(&self, name: &ApartmentName) -> WasteResult<Option<Apartment>>;

    /// Check if an apartment name is taken (canonical form)
    async fn exists_by_name(&self, name: &ApartmentName) -> WasteResult<bool>;
}

/// Resident repository trait
#[trait_variant::make(ResidentRepository: Send)]
pub trait LocalResidentRepository {
    /// Create a new resident
    async fn create(&self, resident: &Resident) -> WasteResult<()>;

    /// Find resident by ID
    async fn find_by_id(&self, resident_id: &ResidentId) -> WasteResult<Option<Resident>>;

    /// Find resident by flat number within an apartment (canonical form)
    async fn find_by_flat(
        &self,
        flat_number: &FlatNumber,
        apartment_id: &ApartmentId,
    ) -> WasteResult<Option<Resident>>;

    /// Check if a flat number is taken within an apartment (canonical form)
    async fn exists_by_flat(
        &self,
        flat_number: &FlatNumber,
        apartment_id: &ApartmentId,
    ) -> WasteResult<bool>;
}

/// Waste record repository trait
///
/// Aggregation is split into distinct-months + per-month totals so the
/// read path mirrors how dashboards are assembled.
#[trait_variant::make(WasteRecordRepository: Send)]
pub trait LocalWasteRecordRepository {
    /// Append a waste record
    async fn create(&self, record: &WasteRecord) -> WasteResult<()>;

    /// Distinct months with records for a resident (storage order)
    async fn distinct_months_for_resident(
        &self,
        resident_id: &ResidentId,
    ) -> WasteResult<Vec<Month>>;

    /// Sum of waste_generated for a resident in one month
    async fn total_for_resident_month(
        &self,
        resident_id: &ResidentId,
        month: Month,
    ) -> WasteResult<i64>;

    /// Distinct months with records anywhere in an apartment (storage order)
    async fn distinct_months_for_apartment(
        &self,
        apartment_id: &ApartmentId,
    ) -> WasteResult<Vec<Month>>;

    /// Sum of waste_generated across all residents of an apartment in one month
    async fn total_for_apartment_month(
        &self,
        apartment_id: &ApartmentId,
        month: Month,
    ) -> WasteResult<i64>;
}
