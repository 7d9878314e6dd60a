//! Login Apartment Use Case
//!
//! Authenticates an apartment account by name + password.

use std::sync::Arc;

use crate::application::config::WasteConfig;
use crate::domain::entity::apartment::Apartment;
use crate::domain::repository::ApartmentRepository;
use crate::domain::value_object::{ApartmentName, RawPassword};
use crate::error::{WasteError, WasteResult};

/// Login apartment input
pub struct LoginApartmentInput {
    pub apartment_name: String,
    pub password: String,
}

/// Login apartment use case
pub struct LoginApartmentUseCase<A>
where
    A: ApartmentRepository,
{
    apartment_repo: Arc<A>,
    config: Arc<WasteConfig>,
}

impl<A> LoginApartmentUseCase<A>
where
    A: ApartmentRepository,
{
    pub fn new(apartment_repo: Arc<A>, config: Arc<WasteConfig>) -> Self {
        Self {
            apartment_repo,
            config,
        }
    }

    /// Returns the apartment record on success.
    ///
    /// Unknown name and wrong password are both reported as
    /// `InvalidCredentials` so callers cannot enumerate apartments.
    pub async fn execute(&self, input: LoginApartmentInput) -> WasteResult<Apartment> {
        let apartment_name =
            ApartmentName::new(input.apartment_name).map_err(|_| WasteError::InvalidCredentials)?;

        let apartment = self
            .apartment_repo
            .find_by_name(&apartment_name)
            .await?
            .ok_or(WasteError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| WasteError::InvalidCredentials)?;

        if !apartment
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(WasteError::InvalidCredentials);
        }

        tracing::info!(
            apartment_id = %apartment.apartment_id,
            "Apartment signed in"
        );

        Ok(apartment)
    }
}
