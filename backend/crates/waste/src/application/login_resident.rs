//! Login Resident Use Case
//!
//! Authenticates a resident by flat number + apartment name + password.

use std::sync::Arc;

use crate::application::config::WasteConfig;
use crate::domain::entity::resident::Resident;
use crate::domain::repository::{ApartmentRepository, ResidentRepository};
use crate::domain::value_object::{ApartmentName, FlatNumber, RawPassword};
use crate::error::{WasteError, WasteResult};

/// Login resident input
pub struct LoginResidentInput {
    pub flat_number: String,
    pub apartment_name: String,
    pub password: String,
}

/// Login resident use case
pub struct LoginResidentUseCase<A, R>
where
    A: ApartmentRepository,
    R: ResidentRepository,
{
    apartment_repo: Arc<A>,
    resident_repo: Arc<R>,
    config: Arc<WasteConfig>,
}

impl<A, R> LoginResidentUseCase<A, R>
where
    A: ApartmentRepository,
    R: ResidentRepository,
{
    pub fn new(apartment_repo: Arc<A>, resident_repo: Arc<R>, config: Arc<WasteConfig>) -> Self {
        Self {
            apartment_repo,
            resident_repo,
            config,
        }
    }

    /// Returns the resident record on success.
    ///
    /// Unknown apartment, unknown flat number and wrong password are all
    /// reported as `InvalidCredentials` - the same policy as apartment
    /// login, so neither actor type leaks existence information.
    pub async fn execute(&self, input: LoginResidentInput) -> WasteResult<Resident> {
        let apartment_name =
            ApartmentName::new(input.apartment_name).map_err(|_| WasteError::InvalidCredentials)?;

        let apartment = self
            .apartment_repo
            .find_by_name(&apartment_name)
            .await?
            .ok_or(WasteError::InvalidCredentials)?;

        let flat_number =
            FlatNumber::new(input.flat_number).map_err(|_| WasteError::InvalidCredentials)?;

        let resident = self
            .resident_repo
            .find_by_flat(&flat_number, &apartment.apartment_id)
            .await?
            .ok_or(WasteError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| WasteError::InvalidCredentials)?;

        if !resident
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(WasteError::InvalidCredentials);
        }

        tracing::info!(
            resident_id = %resident.resident_id,
            apartment_id = %apartment.apartment_id,
            "Resident signed in"
        );

        Ok(resident)
    }
}
