//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::{
    ApartmentDashboardUseCase, LogWasteInput, LogWasteUseCase, LoginApartmentInput,
    LoginApartmentUseCase, LoginResidentInput, LoginResidentUseCase, RegisterApartmentInput,
    RegisterApartmentUseCase, RegisterResidentInput, RegisterResidentUseCase,
    ResidentDashboardUseCase, WasteConfig,
};
use crate::domain::repository::{
    ApartmentRepository, ResidentRepository, WasteRecordRepository,
};
use crate::domain::value_object::{ApartmentId, ResidentId};
use crate::error::WasteResult;
use crate::presentation::dto::{
    ApartmentAuthRequest, ApartmentDto, ApartmentLoginResponse, DashboardRequest,
    DashboardResponse, LogWasteRequest, MessageResponse, ResidentAuthRequest, ResidentDto,
    ResidentLoginResponse, WastePerMonth,
};

/// Shared state for waste handlers
#[derive(Clone)]
pub struct WasteAppState<R>
where
    R: ApartmentRepository
        + ResidentRepository
        + WasteRecordRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<WasteConfig>,
}

// ============================================================================
// Apartment Register
// ============================================================================

/// POST /apartment-register
pub async fn apartment_register<R>(
    State(state): State<WasteAppState<R>>,
    Json(req): Json<ApartmentAuthRequest>,
) -> WasteResult<Json<MessageResponse>>
where
    R: ApartmentRepository
        + ResidentRepository
        + WasteRecordRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = RegisterApartmentUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterApartmentInput {
        apartment_name: req.apartment_name,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse {
        message: "Apartment successfully created".to_string(),
    }))
}

// ============================================================================
// Apartment Login
// ============================================================================

/// POST /apartment-login
pub async fn apartment_login<R>(
    State(state): State<WasteAppState<R>>,
    Json(req): Json<ApartmentAuthRequest>,
) -> WasteResult<Json<ApartmentLoginResponse>>
where
    R: ApartmentRepository
        + ResidentRepository
        + WasteRecordRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = LoginApartmentUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginApartmentInput {
        apartment_name: req.apartment_name,
        password: req.password,
    };

    let apartment = use_case.execute(input).await?;

    Ok(Json(ApartmentLoginResponse {
        user: ApartmentDto::from(apartment),
    }))
}

// ============================================================================
// Resident Register
// ============================================================================

/// POST /resident-register
pub async fn resident_register<R>(
    State(state): State<WasteAppState<R>>,
    Json(req): Json<ResidentAuthRequest>,
) -> WasteResult<Json<MessageResponse>>
where
    R: ApartmentRepository
        + ResidentRepository
        + WasteRecordRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = RegisterResidentUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = RegisterResidentInput {
        flat_number: req.flat_number,
        apartment_name: req.apartment_name,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse {
        message: "Resident account successfully created".to_string(),
    }))
}

// ============================================================================
// Resident Login
// ============================================================================

/// POST /resident-login
pub async fn resident_login<R>(
    State(state): State<WasteAppState<R>>,
    Json(req): Json<ResidentAuthRequest>,
) -> WasteResult<Json<ResidentLoginResponse>>
where
    R: ApartmentRepository
        + ResidentRepository
        + WasteRecordRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = LoginResidentUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let input = LoginResidentInput {
        flat_number: req.flat_number,
        apartment_name: req.apartment_name,
        password: req.password,
    };

    let resident = use_case.execute(input).await?;

    Ok(Json(ResidentLoginResponse {
        user: ResidentDto::from(resident),
    }))
}

// ============================================================================
// Resident Dashboard
// ============================================================================

/// POST /resident-dashboard
pub async fn resident_dashboard<R>(
    State(state): State<WasteAppState<R>>,
    Json(req): Json<DashboardRequest>,
) -> WasteResult<Json<DashboardResponse>>
where
    R: ApartmentRepository
        + ResidentRepository
        + WasteRecordRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ResidentDashboardUseCase::new(state.repo.clone());

    let totals = use_case.execute(&ResidentId::from_uuid(req.id)).await?;

    Ok(Json(DashboardResponse {
        waste_per_month: totals.into_iter().map(WastePerMonth::from).collect(),
    }))
}

// ============================================================================
// Resident Log Waste
// ============================================================================

/// POST /resident-log-waste
pub async fn resident_log_waste<R>(
    State(state): State<WasteAppState<R>>,
    Json(req): Json<LogWasteRequest>,
) -> WasteResult<Json<MessageResponse>>
where
    R: ApartmentRepository
        + ResidentRepository
        + WasteRecordRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = LogWasteUseCase::new(state.repo.clone(), state.repo.clone());

    let input = LogWasteInput {
        resident_id: ResidentId::from_uuid(req.id),
        waste_generated: req.waste_generated,
        month: req.month,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse {
        message: "Waste record successfully created".to_string(),
    }))
}

// ============================================================================
// Apartment Dashboard
// ============================================================================

/// POST /apartment-dashboard
pub async fn apartment_dashboard<R>(
    State(state): State<WasteAppState<R>>,
    Json(req): Json<DashboardRequest>,
) -> WasteResult<Json<DashboardResponse>>
where
    R: ApartmentRepository
        + ResidentRepository
        + WasteRecordRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ApartmentDashboardUseCase::new(state.repo.clone(), state.repo.clone());

    let totals = use_case.execute(&ApartmentId::from_uuid(req.id)).await?;

    Ok(Json(DashboardResponse {
        waste_per_month: totals.into_iter().map(WastePerMonth::from).collect(),
    }))
}
