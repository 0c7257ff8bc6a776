//! Patient service library.
//!
//! In-memory CRUD HTTP service for clinic patients, specializing the
//! generic resource engine from `karte-core`. Runs independently of the
//! appointment service.

pub mod patient;

use std::sync::Arc;

use axum::Router;

use karte_core::{
    AppState, InMemoryResourceRepository, resource_router, serve, ui::handler::route_not_found,
};

use patient::Patient;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "patient-service";

/// Build the application state backed by an empty in-memory store.
pub fn app_state() -> Arc<AppState<Patient>> {
    Arc::new(AppState::new(
        SERVICE_NAME,
        Arc::new(InMemoryResourceRepository::<Patient>::new()),
    ))
}

/// Assemble the full route table for the patient service.
pub fn app(state: Arc<AppState<Patient>>) -> Router {
    resource_router::<Patient>("patients")
        .fallback(route_not_found)
        .with_state(state)
}

/// Run the patient service until a shutdown signal arrives.
pub async fn run_server(port: u16) -> std::io::Result<()> {
    serve(app(app_state()), SERVICE_NAME, port).await
}
