//! Register Resident Use Case
//!
//! Creates a new resident account under an existing apartment and seeds the
//! resident's first waste record.

use std::sync::Arc;

use crate::application::config::WasteConfig;
use crate::domain::entity::{resident::Resident, waste_record::WasteRecord};
use crate::domain::repository::{
    ApartmentRepository, ResidentRepository, WasteRecordRepository,
};
use crate::domain::value_object::{
    AccountPassword, ApartmentName, FlatNumber, RawPassword,
};
use crate::error::{WasteError, WasteResult};

/// Register resident input
pub struct RegisterResidentInput {
    pub flat_number: String,
    pub apartment_name: String,
    pub password: String,
}

/// Register resident use case
pub struct RegisterResidentUseCase<A, R, W>
where
    A: ApartmentRepository,
    R: ResidentRepository,
    W: WasteRecordRepository,
{
    apartment_repo: Arc<A>,
    resident_repo: Arc<R>,
    waste_repo: Arc<W>,
    config: Arc<WasteConfig>,
}

impl<A, R, W> RegisterResidentUseCase<A, R, W>
where
    A: ApartmentRepository,
    R: ResidentRepository,
    W: WasteRecordRepository,
{
    pub fn new(
        apartment_repo: Arc<A>,
        resident_repo: Arc<R>,
        waste_repo: Arc<W>,
        config: Arc<WasteConfig>,
    ) -> Self {
        Self {
            apartment_repo,
            resident_repo,
            waste_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterResidentInput) -> WasteResult<()> {
        // Resolve the parent apartment - registration against an unknown
        // apartment is a distinct, intended signal
        let apartment_name = ApartmentName::new(input.apartment_name)
            .map_err(|e| WasteError::Validation(e.to_string()))?;

        let apartment = self
            .apartment_repo
            .find_by_name(&apartment_name)
            .await?
            .ok_or(WasteError::ApartmentNotFound)?;

        // Flat number must be unique within the apartment
        let flat_number = FlatNumber::new(input.flat_number)
            .map_err(|e| WasteError::Validation(e.to_string()))?;

        if self
            .resident_repo
            .exists_by_flat(&flat_number, &apartment.apartment_id)
            .await?
        {
            return Err(WasteError::DuplicateEntity("resident"));
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)?;
        let password_hash = AccountPassword::from_raw(&raw_password, self.config.pepper())?;

        // Create resident
        let resident = Resident::new(flat_number, apartment.apartment_id, password_hash);
        self.resident_repo.create(&resident).await?;

        // Seed the aggregation: zero waste for the current month, so a
        // brand-new resident has a defined total
        let opening = WasteRecord::opening(resident.resident_id, apartment.apartment_id);
        self.waste_repo.create(&opening).await?;

        tracing::info!(
            resident_id = %resident.resident_id,
            apartment_id = %apartment.apartment_id,
            flat_number = %resident.flat_number,
            "Resident registered"
        );

        Ok(())
    }
}
