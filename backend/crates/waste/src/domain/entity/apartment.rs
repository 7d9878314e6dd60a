//! Apartment Entity
//!
//! The tenant organization: a residential complex that residents belong to.
//! Apartments are created at registration and never deleted.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{AccountPassword, ApartmentId, ApartmentName};

/// Apartment entity
///
/// The globally unique key is the canonical form of `apartment_name`.
#[derive(Debug, Clone)]
pub struct Apartment {
    /// Internal UUID identifier
    pub apartment_id: ApartmentId,
    /// Apartment name (globally unique, case-insensitive)
    pub apartment_name: ApartmentName,
    /// Hashed login password
    pub password_hash: AccountPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Apartment {
    /// Create a new apartment
    pub fn new(apartment_name: ApartmentName, password_hash: AccountPassword) -> Self {
        let now = Utc::now();

        Self {
            apartment_id: ApartmentId::new(),
            apartment_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
