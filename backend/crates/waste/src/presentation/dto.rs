//! API DTOs (Data Transfer Objects)
//!
//! Wire format is snake_case JSON, matching the frontend contract.
//! Login responses never carry credential material.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::resident_dashboard::MonthlyTotal;
use crate::domain::entity::{apartment::Apartment, resident::Resident};

// ============================================================================
// Auth Requests
// ============================================================================

/// Request body for /apartment-register and /apartment-login
#[derive(Debug, Clone, Deserialize)]
pub struct ApartmentAuthRequest {
    pub apartment_name: String,
    pub password: String,
}

/// Request body for /resident-register and /resident-login
#[derive(Debug, Clone, Deserialize)]
pub struct ResidentAuthRequest {
    pub flat_number: String,
    pub apartment_name: String,
    pub password: String,
}

// ============================================================================
// Dashboard / Waste Logging Requests
// ============================================================================

/// Request body for /resident-dashboard and /apartment-dashboard
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardRequest {
    pub id: Uuid,
}

/// Request body for /resident-log-waste
#[derive(Debug, Clone, Deserialize)]
pub struct LogWasteRequest {
    /// Resident id
    pub id: Uuid,
    pub waste_generated: i32,
    /// Calendar month name; defaults to the current month
    #[serde(default)]
    pub month: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Plain confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Apartment record as exposed on the wire (no password hash)
#[derive(Debug, Clone, Serialize)]
pub struct ApartmentDto {
    pub id: Uuid,
    pub apartment_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Apartment> for ApartmentDto {
    fn from(apartment: Apartment) -> Self {
        Self {
            id: apartment.apartment_id.into_uuid(),
            apartment_name: apartment.apartment_name.original().to_string(),
            created_at: apartment.created_at,
            updated_at: apartment.updated_at,
        }
    }
}

/// Resident record as exposed on the wire (no password hash)
#[derive(Debug, Clone, Serialize)]
pub struct ResidentDto {
    pub id: Uuid,
    pub flat_number: String,
    pub apartment_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Resident> for ResidentDto {
    fn from(resident: Resident) -> Self {
        Self {
            id: resident.resident_id.into_uuid(),
            flat_number: resident.flat_number.original().to_string(),
            apartment_id: resident.apartment_id.into_uuid(),
            created_at: resident.created_at,
            updated_at: resident.updated_at,
        }
    }
}

/// Login response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ApartmentLoginResponse {
    pub user: ApartmentDto,
}

/// Login response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ResidentLoginResponse {
    pub user: ResidentDto,
}

/// One aggregated month entry
#[derive(Debug, Clone, Serialize)]
pub struct WastePerMonth {
    pub waste_amount: i64,
    pub month: String,
}

impl From<MonthlyTotal> for WastePerMonth {
    fn from(total: MonthlyTotal) -> Self {
        Self {
            waste_amount: total.total_waste,
            month: total.month.as_str().to_string(),
        }
    }
}

/// Dashboard response envelope
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub waste_per_month: Vec<WastePerMonth>,
}
