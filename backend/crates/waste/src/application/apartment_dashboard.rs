//! Apartment Dashboard Use Case
//!
//! Computes per-month waste totals across ALL residents of an apartment.

use std::sync::Arc;

use crate::application::resident_dashboard::MonthlyTotal;
use crate::domain::repository::{ApartmentRepository, WasteRecordRepository};
use crate::domain::value_object::ApartmentId;
use crate::error::{WasteError, WasteResult};

/// Apartment dashboard use case
pub struct ApartmentDashboardUseCase<A, W>
where
    A: ApartmentRepository,
    W: WasteRecordRepository,
{
    apartment_repo: Arc<A>,
    waste_repo: Arc<W>,
}

impl<A, W> ApartmentDashboardUseCase<A, W>
where
    A: ApartmentRepository,
    W: WasteRecordRepository,
{
    pub fn new(apartment_repo: Arc<A>, waste_repo: Arc<W>) -> Self {
        Self {
            apartment_repo,
            waste_repo,
        }
    }

    /// One total per distinct month with records anywhere in the apartment,
    /// sorted chronologically.
    pub async fn execute(&self, apartment_id: &ApartmentId) -> WasteResult<Vec<MonthlyTotal>> {
        if self
            .apartment_repo
            .find_by_id(apartment_id)
            .await?
            .is_none()
        {
            return Err(WasteError::ApartmentNotFound);
        }

        let mut months = self
            .waste_repo
            .distinct_months_for_apartment(apartment_id)
            .await?;
        months.sort();

        let mut totals = Vec::with_capacity(months.len());
        for month in months {
            let total_waste = self
                .waste_repo
                .total_for_apartment_month(apartment_id, month)
                .await?;
            totals.push(MonthlyTotal { month, total_waste });
        }

        tracing::debug!(
            apartment_id = %apartment_id,
            months = totals.len(),
            "Apartment dashboard computed"
        );

        Ok(totals)
    }
}
