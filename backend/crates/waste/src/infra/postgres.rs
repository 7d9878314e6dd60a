//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{apartment::Apartment, resident::Resident, waste_record::WasteRecord};
use crate::domain::repository::{
    ApartmentRepository, ResidentRepository, WasteRecordRepository,
};
use crate::domain::value_object::{
    AccountPassword, ApartmentId, ApartmentName, FlatNumber, Month, ResidentId, WasteAmount,
};
use crate::error::{WasteError, WasteResult};

/// PostgreSQL-backed waste tracking repository
#[derive(Clone)]
pub struct PgWasteRepository {
    pool: PgPool,
}

impl PgWasteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Apartment Repository Implementation
// ============================================================================

impl ApartmentRepository for PgWasteRepository {
    async fn create(&self, apartment: &Apartment) -> WasteResult<()> {
        sqlx::query(
            r#"
            INSERT INTO apartments (
                apartment_id,
                apartment_name,
                apartment_name_canonical,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(apartment.apartment_id.as_uuid())
        .bind(apartment.apartment_name.original())
        .bind(apartment.apartment_name.canonical())
        .bind(apartment.password_hash.as_phc_string())
        .bind(apartment.created_at)
        .bind(apartment.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, apartment_id: &ApartmentId) -> WasteResult<Option<Apartment>> {
        let row = sqlx::query_as::<_, ApartmentRow>(
            r#"
            SELECT
                apartment_id,
                apartment_name,
                apartment_name_canonical,
                password_hash,
                created_at,
                updated_at
            FROM apartments
            WHERE apartment_id = $1
            "#,
        )
        .bind(apartment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_apartment()).transpose()
    }

    async fn find_by_name(&self, name: &ApartmentName) -> WasteResult<Option<Apartment>> {
        let row = sqlx::query_as::<_, ApartmentRow>(
            r#"
            SELECT
                apartment_id,
                apartment_name,
                apartment_name_canonical,
                password_hash,
                created_at,
                updated_at
            FROM apartments
            WHERE apartment_name_canonical = $1
            "#,
        )
        .bind(name.canonical())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_apartment()).transpose()
    }

    async fn exists_by_name(&self, name: &ApartmentName) -> WasteResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM apartments WHERE apartment_name_canonical = $1)",
        )
        .bind(name.canonical())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Resident Repository Implementation
// ============================================================================

impl ResidentRepository for PgWasteRepository {
    async fn create(&self, resident: &Resident) -> WasteResult<()> {
        sqlx::query(
            r#"
            INSERT INTO residents (
                resident_id,
                flat_number,
                flat_number_canonical,
                apartment_id,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(resident.resident_id.as_uuid())
        .bind(resident.flat_number.original())
        .bind(resident.flat_number.canonical())
        .bind(resident.apartment_id.as_uuid())
        .bind(resident.password_hash.as_phc_string())
        .bind(resident.created_at)
        .bind(resident.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, resident_id: &ResidentId) -> WasteResult<Option<Resident>> {
        let row = sqlx::query_as::<_, ResidentRow>(
            r#"
            SELECT
                resident_id,
                flat_number,
                flat_number_canonical,
                apartment_id,
                password_hash,
                created_at,
                updated_at
            FROM residents
            WHERE resident_id = $1
            "#,
        )
        .bind(resident_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_resident()).transpose()
    }

    async fn find_by_flat(
        &self,
        flat_number: &FlatNumber,
        apartment_id: &ApartmentId,
    ) -> WasteResult<Option<Resident>> {
        let row = sqlx::query_as::<_, ResidentRow>(
            r#"
            SELECT
                resident_id,
                flat_number,
                flat_number_canonical,
                apartment_id,
                password_hash,
                created_at,
                updated_at
            FROM residents
            WHERE flat_number_canonical = $1 AND apartment_id = $2
            "#,
        )
        .bind(flat_number.canonical())
        .bind(apartment_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_resident()).transpose()
    }

    async fn exists_by_flat(
        &self,
        flat_number: &FlatNumber,
        apartment_id: &ApartmentId,
    ) -> WasteResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM residents
                WHERE flat_number_canonical = $1 AND apartment_id = $2
            )
            "#,
        )
        .bind(flat_number.canonical())
        .bind(apartment_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Waste Record Repository Implementation
// ============================================================================

impl WasteRecordRepository for PgWasteRepository {
    async fn create(&self, record: &WasteRecord) -> WasteResult<()> {
        sqlx::query(
            r#"
            INSERT INTO waste_records (
                waste_record_id,
                waste_generated,
                month,
                resident_id,
                apartment_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.waste_record_id.as_uuid())
        .bind(record.waste_generated.as_i32())
        .bind(record.month.as_str())
        .bind(record.resident_id.as_uuid())
        .bind(record.apartment_id.as_uuid())
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn distinct_months_for_resident(
        &self,
        resident_id: &ResidentId,
    ) -> WasteResult<Vec<Month>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT month FROM waste_records WHERE resident_id = $1",
        )
        .bind(resident_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        names.into_iter().map(parse_month).collect()
    }

    async fn total_for_resident_month(
        &self,
        resident_id: &ResidentId,
        month: Month,
    ) -> WasteResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(waste_generated), 0)::BIGINT
            FROM waste_records
            WHERE resident_id = $1 AND month = $2
            "#,
        )
        .bind(resident_id.as_uuid())
        .bind(month.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn distinct_months_for_apartment(
        &self,
        apartment_id: &ApartmentId,
    ) -> WasteResult<Vec<Month>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT month FROM waste_records WHERE apartment_id = $1",
        )
        .bind(apartment_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        names.into_iter().map(parse_month).collect()
    }

    async fn total_for_apartment_month(
        &self,
        apartment_id: &ApartmentId,
        month: Month,
    ) -> WasteResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(waste_generated), 0)::BIGINT
            FROM waste_records
            WHERE apartment_id = $1 AND month = $2
            "#,
        )
        .bind(apartment_id.as_uuid())
        .bind(month.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

/// Stored month names come from our own inserts; anything unparsable means
/// the row was tampered with or written by another tool
fn parse_month(name: String) -> WasteResult<Month> {
    Month::from_name(&name)
        .map_err(|e| WasteError::Internal(format!("Invalid month in database: {}", e)))
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ApartmentRow {
    apartment_id: Uuid,
    apartment_name: String,
    #[allow(dead_code)]
    apartment_name_canonical: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ApartmentRow {
    fn into_apartment(self) -> WasteResult<Apartment> {
        let apartment_name = ApartmentName::from_db(&self.apartment_name)
            .map_err(|e| WasteError::Internal(format!("Invalid apartment_name: {}", e)))?;

        let password_hash = AccountPassword::from_db(self.password_hash)?;

        Ok(Apartment {
            apartment_id: ApartmentId::from_uuid(self.apartment_id),
            apartment_name,
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ResidentRow {
    resident_id: Uuid,
    flat_number: String,
    #[allow(dead_code)]
    flat_number_canonical: String,
    apartment_id: Uuid,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ResidentRow {
    fn into_resident(self) -> WasteResult<Resident> {
        let flat_number = FlatNumber::from_db(&self.flat_number)
            .map_err(|e| WasteError::Internal(format!("Invalid flat_number: {}", e)))?;

        let password_hash = AccountPassword::from_db(self.password_hash)?;

        Ok(Resident {
            resident_id: ResidentId::from_uuid(self.resident_id),
            flat_number,
            apartment_id: ApartmentId::from_uuid(self.apartment_id),
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
