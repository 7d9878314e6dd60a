//! Register Apartment Use Case
//!
//! Creates a new apartment (tenant) account.

use std::sync::Arc;

use crate::application::config::WasteConfig;
use crate::domain::entity::apartment::Apartment;
use crate::domain::repository::ApartmentRepository;
use crate::domain::value_object::{AccountPassword, ApartmentName, RawPassword};
use crate::error::{WasteError, WasteResult};

/// Register apartment input
pub struct RegisterApartmentInput {
    pub apartment_name: String,
    pub password: String,
}

/// Register apartment use case
pub struct RegisterApartmentUseCase<A>
where
    A: ApartmentRepository,
{
    apartment_repo: Arc<A>,
    config: Arc<WasteConfig>,
}

impl<A> RegisterApartmentUseCase<A>
where
    A: ApartmentRepository,
{
    pub fn new(apartment_repo: Arc<A>, config: Arc<WasteConfig>) -> Self {
        Self {
            apartment_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterApartmentInput) -> WasteResult<()> {
        // Validate name
        let apartment_name = ApartmentName::new(input.apartment_name)
            .map_err(|e| WasteError::Validation(e.to_string()))?;

        // Check if the name is taken
        if self.apartment_repo.exists_by_name(&apartment_name).await? {
            return Err(WasteError::DuplicateEntity("apartment"));
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)?;
        let password_hash = AccountPassword::from_raw(&raw_password, self.config.pepper())?;

        // Create and persist
        let apartment = Apartment::new(apartment_name, password_hash);
        self.apartment_repo.create(&apartment).await?;

        tracing::info!(
            apartment_id = %apartment.apartment_id,
            apartment_name = %apartment.apartment_name,
            "Apartment registered"
        );

        Ok(())
    }
}
