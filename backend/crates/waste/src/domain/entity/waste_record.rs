//! Waste Record Entity
//!
//! One logged waste quantity for a resident in a given month. Records are
//! append-only: the model permits multiple rows per resident per month, and
//! totals are sums over all matching rows - never a mutable counter.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    ApartmentId, Month, ResidentId, WasteAmount, WasteRecordId,
};

/// Waste record entity
#[derive(Debug, Clone)]
pub struct WasteRecord {
    /// Internal UUID identifier
    pub waste_record_id: WasteRecordId,
    /// Logged quantity (non-negative)
    pub waste_generated: WasteAmount,
    /// Calendar month the quantity was logged against
    pub month: Month,
    /// Resident the record belongs to
    pub resident_id: ResidentId,
    /// Denormalized parent apartment, for apartment-wide aggregation
    pub apartment_id: ApartmentId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl WasteRecord {
    /// Create a new waste record
    pub fn new(
        resident_id: ResidentId,
        apartment_id: ApartmentId,
        waste_generated: WasteAmount,
        month: Month,
    ) -> Self {
        let now = Utc::now();

        Self {
            waste_record_id: WasteRecordId::new(),
            waste_generated,
            month,
            resident_id,
            apartment_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// The seed record inserted when a resident registers: zero waste for
    /// the current calendar month, so a brand-new resident has a defined
    /// (zero) total.
    pub fn opening(resident_id: ResidentId, apartment_id: ApartmentId) -> Self {
        Self::new(
            resident_id,
            apartment_id,
            WasteAmount::zero(),
            Month::current(),
        )
    }
}
