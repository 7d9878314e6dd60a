//! Log Waste Use Case
//!
//! Appends a new waste reading for a resident. Totals remain sums over all
//! rows, so logging twice in one month accumulates rather than overwrites.

use std::sync::Arc;

use crate::domain::entity::waste_record::WasteRecord;
use crate::domain::repository::{ResidentRepository, WasteRecordRepository};
use crate::domain::value_object::{Month, ResidentId, WasteAmount};
use crate::error::{WasteError, WasteResult};

/// Log waste input
pub struct LogWasteInput {
    pub resident_id: ResidentId,
    pub waste_generated: i32,
    /// Calendar month name; defaults to the current month
    pub month: Option<String>,
}

/// Log waste use case
pub struct LogWasteUseCase<R, W>
where
    R: ResidentRepository,
    W: WasteRecordRepository,
{
    resident_repo: Arc<R>,
    waste_repo: Arc<W>,
}

impl<R, W> LogWasteUseCase<R, W>
where
    R: ResidentRepository,
    W: WasteRecordRepository,
{
    pub fn new(resident_repo: Arc<R>, waste_repo: Arc<W>) -> Self {
        Self {
            resident_repo,
            waste_repo,
        }
    }

    pub async fn execute(&self, input: LogWasteInput) -> WasteResult<()> {
        let resident = self
            .resident_repo
            .find_by_id(&input.resident_id)
            .await?
            .ok_or(WasteError::ResidentNotFound)?;

        let waste_generated = WasteAmount::new(input.waste_generated)
            .map_err(|e| WasteError::Validation(e.to_string()))?;

        let month = match input.month {
            Some(name) => {
                Month::from_name(name).map_err(|e| WasteError::Validation(e.to_string()))?
            }
            None => Month::current(),
        };

        let record = WasteRecord::new(
            resident.resident_id,
            resident.apartment_id,
            waste_generated,
            month,
        );
        self.waste_repo.create(&record).await?;

        tracing::info!(
            resident_id = %resident.resident_id,
            month = %month,
            waste_generated = waste_generated.as_i32(),
            "Waste recorded"
        );

        Ok(())
    }
}
