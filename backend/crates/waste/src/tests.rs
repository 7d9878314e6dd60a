//! Unit tests for the waste crate
//!
//! Use cases run against an in-memory repository implementing the domain
//! repository traits, so the full register/login/dashboard flows are
//! exercised without a database.

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use crate::application::config::WasteConfig;
    use crate::domain::entity::{
        apartment::Apartment, resident::Resident, waste_record::WasteRecord,
    };
    use crate::domain::repository::{
        ApartmentRepository, ResidentRepository, WasteRecordRepository,
    };
    use crate::domain::value_object::{
        ApartmentId, ApartmentName, FlatNumber, Month, ResidentId,
    };
    use crate::error::WasteResult;

    /// In-memory repository backing all three repository traits
    #[derive(Default)]
    pub struct InMemoryStore {
        apartments: Mutex<Vec<Apartment>>,
        residents: Mutex<Vec<Resident>>,
        waste_records: Mutex<Vec<WasteRecord>>,
    }

    impl ApartmentRepository for InMemoryStore {
        async fn create(&self, apartment: &Apartment) -> WasteResult<()> {
            self.apartments.lock().unwrap().push(apartment.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            apartment_id: &ApartmentId,
        ) -> WasteResult<Option<Apartment>> {
            Ok(self
                .apartments
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.apartment_id.as_uuid() == apartment_id.as_uuid())
                .cloned())
        }

        async fn find_by_name(&self, name: &ApartmentName) -> WasteResult<Option<Apartment>> {
            Ok(self
                .apartments
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.apartment_name.canonical() == name.canonical())
                .cloned())
        }

        async fn exists_by_name(&self, name: &ApartmentName) -> WasteResult<bool> {
            Ok(self
                .apartments
                .lock()
                .unwrap()
                .iter()
                .any(|a| a.apartment_name.canonical() == name.canonical()))
        }
    }

    impl ResidentRepository for InMemoryStore {
        async fn create(&self, resident: &Resident) -> WasteResult<()> {
            self.residents.lock().unwrap().push(resident.clone());
            Ok(())
        }

        async fn find_by_id(&self, resident_id: &ResidentId) -> WasteResult<Option<Resident>> {
            Ok(self
                .residents
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.resident_id.as_uuid() == resident_id.as_uuid())
                .cloned())
        }

        async fn find_by_flat(
            &self,
            flat_number: &FlatNumber,
            apartment_id: &ApartmentId,
        ) -> WasteResult<Option<Resident>> {
            Ok(self
                .residents
                .lock()
                .unwrap()
                .iter()
                .find(|r| {
                    r.flat_number.canonical() == flat_number.canonical()
                        && r.apartment_id.as_uuid() == apartment_id.as_uuid()
                })
                .cloned())
        }

        async fn exists_by_flat(
            &self,
            flat_number: &FlatNumber,
            apartment_id: &ApartmentId,
        ) -> WasteResult<bool> {
            Ok(self
                .residents
                .lock()
                .unwrap()
                .iter()
                .any(|r| {
                    r.flat_number.canonical() == flat_number.canonical()
                        && r.apartment_id.as_uuid() == apartment_id.as_uuid()
                }))
        }
    }

    impl WasteRecordRepository for InMemoryStore {
        async fn create(&self, record: &WasteRecord) -> WasteResult<()> {
            self.waste_records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn distinct_months_for_resident(
            &self,
            resident_id: &ResidentId,
        ) -> WasteResult<Vec<Month>> {
            let records = self.waste_records.lock().unwrap();
            let mut months = Vec::new();
            for record in records
                .iter()
                .filter(|r| r.resident_id.as_uuid() == resident_id.as_uuid())
            {
                if !months.contains(&record.month) {
                    months.push(record.month);
                }
            }
            Ok(months)
        }

        async fn total_for_resident_month(
            &self,
            resident_id: &ResidentId,
            month: Month,
        ) -> WasteResult<i64> {
            Ok(self
                .waste_records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| {
                    r.resident_id.as_uuid() == resident_id.as_uuid() && r.month == month
                })
                .map(|r| r.waste_generated.as_i32() as i64)
                .sum())
        }

        async fn distinct_months_for_apartment(
            &self,
            apartment_id: &ApartmentId,
        ) -> WasteResult<Vec<Month>> {
            let records = self.waste_records.lock().unwrap();
            let mut months = Vec::new();
            for record in records
                .iter()
                .filter(|r| r.apartment_id.as_uuid() == apartment_id.as_uuid())
            {
                if !months.contains(&record.month) {
                    months.push(record.month);
                }
            }
            Ok(months)
        }

        async fn total_for_apartment_month(
            &self,
            apartment_id: &ApartmentId,
            month: Month,
        ) -> WasteResult<i64> {
            Ok(self
                .waste_records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| {
                    r.apartment_id.as_uuid() == apartment_id.as_uuid() && r.month == month
                })
                .map(|r| r.waste_generated.as_i32() as i64)
                .sum())
        }
    }

    pub fn store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::default())
    }

    pub fn config() -> Arc<WasteConfig> {
        Arc::new(WasteConfig::default())
    }
}

#[cfg(test)]
mod apartment_auth_tests {
    use super::support::{config, store};
    use crate::application::{
        LoginApartmentInput, LoginApartmentUseCase, RegisterApartmentInput,
        RegisterApartmentUseCase,
    };
    use crate::error::WasteError;

    #[tokio::test]
    async fn test_register_apartment() {
        let store = store();
        let use_case = RegisterApartmentUseCase::new(store.clone(), config());

        let result = use_case
            .execute(RegisterApartmentInput {
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_apartment_twice_fails() {
        let store = store();
        let use_case = RegisterApartmentUseCase::new(store.clone(), config());

        use_case
            .execute(RegisterApartmentInput {
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        let result = use_case
            .execute(RegisterApartmentInput {
                apartment_name: "Oakwood".to_string(),
                password: "other-pw".to_string(),
            })
            .await;

        assert!(matches!(result, Err(WasteError::DuplicateEntity("apartment"))));
    }

    #[tokio::test]
    async fn test_register_apartment_name_unique_across_case() {
        let store = store();
        let use_case = RegisterApartmentUseCase::new(store.clone(), config());

        use_case
            .execute(RegisterApartmentInput {
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        let result = use_case
            .execute(RegisterApartmentInput {
                apartment_name: "OAKWOOD".to_string(),
                password: "pw123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(WasteError::DuplicateEntity("apartment"))));
    }

    #[tokio::test]
    async fn test_login_apartment() {
        let store = store();
        let register = RegisterApartmentUseCase::new(store.clone(), config());
        register
            .execute(RegisterApartmentInput {
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        let login = LoginApartmentUseCase::new(store.clone(), config());
        let apartment = login
            .execute(LoginApartmentInput {
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(apartment.apartment_name.original(), "Oakwood");
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_name_are_indistinguishable() {
        let store = store();
        let register = RegisterApartmentUseCase::new(store.clone(), config());
        register
            .execute(RegisterApartmentInput {
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        let login = LoginApartmentUseCase::new(store.clone(), config());

        let wrong_password = login
            .execute(LoginApartmentInput {
                apartment_name: "Oakwood".to_string(),
                password: "wrongpw".to_string(),
            })
            .await;
        assert!(matches!(wrong_password, Err(WasteError::InvalidCredentials)));

        let unknown_name = login
            .execute(LoginApartmentInput {
                apartment_name: "Nonexistent".to_string(),
                password: "anything".to_string(),
            })
            .await;
        assert!(matches!(unknown_name, Err(WasteError::InvalidCredentials)));
    }
}

#[cfg(test)]
mod resident_auth_tests {
    use super::support::{config, store};
    use crate::application::{
        LoginResidentInput, LoginResidentUseCase, RegisterApartmentInput,
        RegisterApartmentUseCase, RegisterResidentInput, RegisterResidentUseCase,
    };
    use crate::error::WasteError;

    async fn seed_apartment(store: &std::sync::Arc<super::support::InMemoryStore>, name: &str) {
        RegisterApartmentUseCase::new(store.clone(), config())
            .execute(RegisterApartmentInput {
                apartment_name: name.to_string(),
                password: "apt-pw".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_register_resident() {
        let store = store();
        seed_apartment(&store, "Oakwood").await;

        let use_case = RegisterResidentUseCase::new(
            store.clone(),
            store.clone(),
            store.clone(),
            config(),
        );

        let result = use_case
            .execute(RegisterResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_resident_unknown_apartment_fails() {
        let store = store();

        let use_case = RegisterResidentUseCase::new(
            store.clone(),
            store.clone(),
            store.clone(),
            config(),
        );

        let result = use_case
            .execute(RegisterResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Nonexistent".to_string(),
                password: "pw123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(WasteError::ApartmentNotFound)));
    }

    #[tokio::test]
    async fn test_register_resident_duplicate_flat_fails() {
        let store = store();
        seed_apartment(&store, "Oakwood").await;

        let use_case = RegisterResidentUseCase::new(
            store.clone(),
            store.clone(),
            store.clone(),
            config(),
        );

        use_case
            .execute(RegisterResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        let result = use_case
            .execute(RegisterResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Oakwood".to_string(),
                password: "other".to_string(),
            })
            .await;

        assert!(matches!(result, Err(WasteError::DuplicateEntity("resident"))));
    }

    #[tokio::test]
    async fn test_same_flat_under_different_apartments_succeeds() {
        let store = store();
        seed_apartment(&store, "Oakwood").await;
        seed_apartment(&store, "Elmwood").await;

        let use_case = RegisterResidentUseCase::new(
            store.clone(),
            store.clone(),
            store.clone(),
            config(),
        );

        for apartment in ["Oakwood", "Elmwood"] {
            let result = use_case
                .execute(RegisterResidentInput {
                    flat_number: "12A".to_string(),
                    apartment_name: apartment.to_string(),
                    password: "pw123".to_string(),
                })
                .await;
            assert!(result.is_ok(), "registration under {} failed", apartment);
        }
    }

    #[tokio::test]
    async fn test_login_resident() {
        let store = store();
        seed_apartment(&store, "Oakwood").await;

        RegisterResidentUseCase::new(store.clone(), store.clone(), store.clone(), config())
            .execute(RegisterResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        let login = LoginResidentUseCase::new(store.clone(), store.clone(), config());
        let resident = login
            .execute(LoginResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(resident.flat_number.original(), "12A");
    }

    #[tokio::test]
    async fn test_login_resident_failures_are_merged() {
        let store = store();
        seed_apartment(&store, "Oakwood").await;

        RegisterResidentUseCase::new(store.clone(), store.clone(), store.clone(), config())
            .execute(RegisterResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        let login = LoginResidentUseCase::new(store.clone(), store.clone(), config());

        // Wrong password
        let result = login
            .execute(LoginResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Oakwood".to_string(),
                password: "wrongpw".to_string(),
            })
            .await;
        assert!(matches!(result, Err(WasteError::InvalidCredentials)));

        // Unknown flat
        let result = login
            .execute(LoginResidentInput {
                flat_number: "99Z".to_string(),
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await;
        assert!(matches!(result, Err(WasteError::InvalidCredentials)));

        // Unknown apartment must NOT leak existence either
        let result = login
            .execute(LoginResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Nonexistent".to_string(),
                password: "pw123".to_string(),
            })
            .await;
        assert!(matches!(result, Err(WasteError::InvalidCredentials)));
    }
}

#[cfg(test)]
mod dashboard_tests {
    use super::support::{config, store};
    use crate::application::{
        LoginResidentInput, LoginResidentUseCase, RegisterApartmentInput,
        RegisterApartmentUseCase, RegisterResidentInput, RegisterResidentUseCase,
        ResidentDashboardUseCase,
    };
    use crate::domain::entity::waste_record::WasteRecord;
    use crate::domain::repository::WasteRecordRepository;
    use crate::domain::value_object::{
        ApartmentId, Month, ResidentId, WasteAmount,
    };

    #[tokio::test]
    async fn test_fresh_resident_has_zero_total_for_current_month() {
        let store = store();

        RegisterApartmentUseCase::new(store.clone(), config())
            .execute(RegisterApartmentInput {
                apartment_name: "Oakwood".to_string(),
                password: "apt-pw".to_string(),
            })
            .await
            .unwrap();

        RegisterResidentUseCase::new(store.clone(), store.clone(), store.clone(), config())
            .execute(RegisterResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        let resident = LoginResidentUseCase::new(store.clone(), store.clone(), config())
            .execute(LoginResidentInput {
                flat_number: "12A".to_string(),
                apartment_name: "Oakwood".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        let totals = ResidentDashboardUseCase::new(store.clone())
            .execute(&resident.resident_id)
            .await
            .unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].month, Month::current());
        assert_eq!(totals[0].total_waste, 0);
    }

    #[tokio::test]
    async fn test_resident_with_no_records_yields_empty_sequence() {
        let store = store();

        let totals = ResidentDashboardUseCase::new(store.clone())
            .execute(&ResidentId::new())
            .await
            .unwrap();

        assert!(totals.is_empty());
    }

    #[tokio::test]
    async fn test_multiple_records_in_one_month_are_summed() {
        let store = store();
        let resident_id = ResidentId::new();
        let apartment_id = ApartmentId::new();

        for amount in [5, 3] {
            let record = WasteRecord::new(
                resident_id,
                apartment_id,
                WasteAmount::new(amount).unwrap(),
                Month::June,
            );
            WasteRecordRepository::create(&*store, &record).await.unwrap();
        }

        let totals = ResidentDashboardUseCase::new(store.clone())
            .execute(&resident_id)
            .await
            .unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].month, Month::June);
        assert_eq!(totals[0].total_waste, 8);
    }

    #[tokio::test]
    async fn test_months_are_sorted_chronologically() {
        let store = store();
        let resident_id = ResidentId::new();
        let apartment_id = ApartmentId::new();

        for month in [Month::March, Month::January, Month::December] {
            let record = WasteRecord::new(
                resident_id,
                apartment_id,
                WasteAmount::new(1).unwrap(),
                month,
            );
            WasteRecordRepository::create(&*store, &record).await.unwrap();
        }

        let totals = ResidentDashboardUseCase::new(store.clone())
            .execute(&resident_id)
            .await
            .unwrap();

        let months: Vec<Month> = totals.iter().map(|t| t.month).collect();
        assert_eq!(months, vec![Month::January, Month::March, Month::December]);
    }

    #[tokio::test]
    async fn test_totals_are_scoped_per_resident() {
        let store = store();
        let apartment_id = ApartmentId::new();
        let first = ResidentId::new();
        let second = ResidentId::new();

        for (resident_id, amount) in [(first, 5), (second, 7)] {
            let record = WasteRecord::new(
                resident_id,
                apartment_id,
                WasteAmount::new(amount).unwrap(),
                Month::June,
            );
            WasteRecordRepository::create(&*store, &record).await.unwrap();
        }

        let totals = ResidentDashboardUseCase::new(store.clone())
            .execute(&first)
            .await
            .unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total_waste, 5);
    }
}

#[cfg(test)]
mod log_waste_tests {
    use super::support::{config, store};
    use crate::application::{LogWasteInput, LogWasteUseCase, ResidentDashboardUseCase};
    use crate::domain::entity::resident::Resident;
    use crate::domain::repository::ResidentRepository;
    use crate::domain::value_object::{
        AccountPassword, ApartmentId, FlatNumber, Month, RawPassword, ResidentId,
    };
    use crate::error::WasteError;

    async fn seed_resident(store: &std::sync::Arc<super::support::InMemoryStore>) -> Resident {
        let raw = RawPassword::new("pw123".to_string()).unwrap();
        let hash = AccountPassword::from_raw(&raw, config().pepper()).unwrap();
        let resident = Resident::new(FlatNumber::new("12A").unwrap(), ApartmentId::new(), hash);
        ResidentRepository::create(&**store, &resident).await.unwrap();
        resident
    }

    #[tokio::test]
    async fn test_log_waste_appends_and_accumulates() {
        let store = store();
        let resident = seed_resident(&store).await;

        let use_case = LogWasteUseCase::new(store.clone(), store.clone());

        for amount in [5, 3] {
            use_case
                .execute(LogWasteInput {
                    resident_id: resident.resident_id,
                    waste_generated: amount,
                    month: Some("June".to_string()),
                })
                .await
                .unwrap();
        }

        let totals = ResidentDashboardUseCase::new(store.clone())
            .execute(&resident.resident_id)
            .await
            .unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].month, Month::June);
        assert_eq!(totals[0].total_waste, 8);
    }

    #[tokio::test]
    async fn test_log_waste_defaults_to_current_month() {
        let store = store();
        let resident = seed_resident(&store).await;

        LogWasteUseCase::new(store.clone(), store.clone())
            .execute(LogWasteInput {
                resident_id: resident.resident_id,
                waste_generated: 4,
                month: None,
            })
            .await
            .unwrap();

        let totals = ResidentDashboardUseCase::new(store.clone())
            .execute(&resident.resident_id)
            .await
            .unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].month, Month::current());
        assert_eq!(totals[0].total_waste, 4);
    }

    #[tokio::test]
    async fn test_log_waste_unknown_resident_fails() {
        let store = store();

        let result = LogWasteUseCase::new(store.clone(), store.clone())
            .execute(LogWasteInput {
                resident_id: ResidentId::new(),
                waste_generated: 4,
                month: None,
            })
            .await;

        assert!(matches!(result, Err(WasteError::ResidentNotFound)));
    }

    #[tokio::test]
    async fn test_log_waste_rejects_negative_amount() {
        let store = store();
        let resident = seed_resident(&store).await;

        let result = LogWasteUseCase::new(store.clone(), store.clone())
            .execute(LogWasteInput {
                resident_id: resident.resident_id,
                waste_generated: -5,
                month: None,
            })
            .await;

        assert!(matches!(result, Err(WasteError::Validation(_))));
    }

    #[tokio::test]
    async fn test_log_waste_rejects_bad_month_name() {
        let store = store();
        let resident = seed_resident(&store).await;

        let result = LogWasteUseCase::new(store.clone(), store.clone())
            .execute(LogWasteInput {
                resident_id: resident.resident_id,
                waste_generated: 5,
                month: Some("Smarch".to_string()),
            })
            .await;

        assert!(matches!(result, Err(WasteError::Validation(_))));
    }
}

#[cfg(test)]
mod apartment_dashboard_tests {
    use super::support::{config, store};
    use crate::application::{
        ApartmentDashboardUseCase, RegisterApartmentInput, RegisterApartmentUseCase,
    };
    use crate::domain::entity::waste_record::WasteRecord;
    use crate::domain::repository::{ApartmentRepository, WasteRecordRepository};
    use crate::domain::value_object::{
        ApartmentId, ApartmentName, Month, ResidentId, WasteAmount,
    };
    use crate::error::WasteError;

    #[tokio::test]
    async fn test_unknown_apartment_fails() {
        let store = store();

        let result = ApartmentDashboardUseCase::new(store.clone(), store.clone())
            .execute(&ApartmentId::new())
            .await;

        assert!(matches!(result, Err(WasteError::ApartmentNotFound)));
    }

    #[tokio::test]
    async fn test_totals_sum_across_residents() {
        let store = store();

        RegisterApartmentUseCase::new(store.clone(), config())
            .execute(RegisterApartmentInput {
                apartment_name: "Oakwood".to_string(),
                password: "apt-pw".to_string(),
            })
            .await
            .unwrap();

        let apartment = ApartmentRepository::find_by_name(
            &*store,
            &ApartmentName::new("Oakwood").unwrap(),
        )
        .await
        .unwrap()
        .unwrap();

        // Two residents logging into the same and different months
        let first = ResidentId::new();
        let second = ResidentId::new();
        let records = [
            (first, 5, Month::June),
            (second, 3, Month::June),
            (second, 2, Month::January),
        ];
        for (resident_id, amount, month) in records {
            let record = WasteRecord::new(
                resident_id,
                apartment.apartment_id,
                WasteAmount::new(amount).unwrap(),
                month,
            );
            WasteRecordRepository::create(&*store, &record).await.unwrap();
        }

        let totals = ApartmentDashboardUseCase::new(store.clone(), store.clone())
            .execute(&apartment.apartment_id)
            .await
            .unwrap();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].month, Month::January);
        assert_eq!(totals[0].total_waste, 2);
        assert_eq!(totals[1].month, Month::June);
        assert_eq!(totals[1].total_waste, 8);
    }
}
