//! Resident Dashboard Use Case
//!
//! Computes the per-month waste totals for one resident.

use std::sync::Arc;

use crate::domain::repository::WasteRecordRepository;
use crate::domain::value_object::{Month, ResidentId};
use crate::error::WasteResult;

/// One aggregated month on a dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total_waste: i64,
}

/// Resident dashboard use case
pub struct ResidentDashboardUseCase<W>
where
    W: WasteRecordRepository,
{
    waste_repo: Arc<W>,
}

impl<W> ResidentDashboardUseCase<W>
where
    W: WasteRecordRepository,
{
    pub fn new(waste_repo: Arc<W>) -> Self {
        Self { waste_repo }
    }

    /// One total per distinct month with records, sorted chronologically.
    /// A resident with no rows yields an empty sequence.
    pub async fn execute(&self, resident_id: &ResidentId) -> WasteResult<Vec<MonthlyTotal>> {
        let mut months = self
            .waste_repo
            .distinct_months_for_resident(resident_id)
            .await?;
        months.sort();

        // One SUM query per month; fine at this system's scale
        let mut totals = Vec::with_capacity(months.len());
        for month in months {
            let total_waste = self
                .waste_repo
                .total_for_resident_month(resident_id, month)
                .await?;
            totals.push(MonthlyTotal { month, total_waste });
        }

        tracing::debug!(
            resident_id = %resident_id,
            months = totals.len(),
            "Resident dashboard computed"
        );

        Ok(totals)
    }
}
