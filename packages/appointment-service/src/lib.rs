//! Appointment service library.
//!
//! In-memory CRUD HTTP service for clinic appointments, specializing the
//! generic resource engine from `karte-core`. Runs independently of the
//! patient service; no cross-resource integrity is checked.

pub mod appointment;
pub mod handler;

use std::sync::Arc;

use axum::{Router, routing::get};

use karte_core::{
    AppState, InMemoryResourceRepository, resource_router, serve, ui::handler::route_not_found,
};

use appointment::Appointment;
use handler::list_by_patient;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "appointment-service";

/// Build the application state backed by an empty in-memory store.
pub fn app_state() -> Arc<AppState<Appointment>> {
    Arc::new(AppState::new(
        SERVICE_NAME,
        Arc::new(InMemoryResourceRepository::<Appointment>::new()),
    ))
}

/// Assemble the full route table for the appointment service.
pub fn app(state: Arc<AppState<Appointment>>) -> Router {
    resource_router::<Appointment>("appointments")
        .route(
            "/api/appointments/patient/{patient_id}",
            get(list_by_patient),
        )
        .fallback(route_not_found)
        .with_state(state)
}

/// Run the appointment service until a shutdown signal arrives.
pub async fn run_server(port: u16) -> std::io::Result<()> {
    serve(app(app_state()), SERVICE_NAME, port).await
}
