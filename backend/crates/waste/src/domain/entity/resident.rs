//! Resident Entity
//!
//! A unit within an apartment, identified by flat number. A resident cannot
//! exist without a valid parent apartment.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{AccountPassword, ApartmentId, FlatNumber, ResidentId};

/// Resident entity
///
/// Uniqueness invariant: the (flat_number, apartment_id) pair is unique,
/// on the canonical flat-number form.
#[derive(Debug, Clone)]
pub struct Resident {
    /// Internal UUID identifier
    pub resident_id: ResidentId,
    /// Flat number within the apartment
    pub flat_number: FlatNumber,
    /// Parent apartment
    pub apartment_id: ApartmentId,
    /// Hashed login password
    pub password_hash: AccountPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Resident {
    /// Create a new resident under an apartment
    pub fn new(
        flat_number: FlatNumber,
        apartment_id: ApartmentId,
        password_hash: AccountPassword,
    ) -> Self {
        let now = Utc::now();

        Self {
            resident_id: ResidentId::new(),
            flat_number,
            apartment_id,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
