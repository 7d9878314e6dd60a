//! Waste Tracking Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::WasteConfig;
use crate::domain::repository::{
    ApartmentRepository, ResidentRepository, WasteRecordRepository,
};
use crate::infra::postgres::PgWasteRepository;
use crate::presentation::handlers::{self, WasteAppState};

/// Create the waste tracking router with PostgreSQL repository
pub fn waste_router(repo: PgWasteRepository, config: WasteConfig) -> Router {
    let state = WasteAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/apartment-register",
            post(handlers::apartment_register::<PgWasteRepository>),
        )
        .route(
            "/apartment-login",
            post(handlers::apartment_login::<PgWasteRepository>),
        )
        .route(
            "/resident-register",
            post(handlers::resident_register::<PgWasteRepository>),
        )
        .route(
            "/resident-login",
            post(handlers::resident_login::<PgWasteRepository>),
        )
        .route(
            "/resident-dashboard",
            post(handlers::resident_dashboard::<PgWasteRepository>),
        )
        .route(
            "/resident-log-waste",
            post(handlers::resident_log_waste::<PgWasteRepository>),
        )
        .route(
            "/apartment-dashboard",
            post(handlers::apartment_dashboard::<PgWasteRepository>),
        )
        .with_state(state)
}

/// Create a generic router for any repository implementation
pub fn waste_router_generic<R>(repo: R, config: WasteConfig) -> Router
where
    R: ApartmentRepository
        + ResidentRepository
        + WasteRecordRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let state = WasteAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/apartment-register", post(handlers::apartment_register::<R>))
        .route("/apartment-login", post(handlers::apartment_login::<R>))
        .route("/resident-register", post(handlers::resident_register::<R>))
        .route("/resident-login", post(handlers::resident_login::<R>))
        .route("/resident-dashboard", post(handlers::resident_dashboard::<R>))
        .route("/resident-log-waste", post(handlers::resident_log_waste::<R>))
        .route("/apartment-dashboard", post(handlers::apartment_dashboard::<R>))
        .with_state(state)
}
