//! Appointment-specific HTTP handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use karte_core::{AppState, Envelope, ResourceRepository};

use crate::appointment::Appointment;

/// List appointments for one patient.
///
/// Always succeeds; an unknown patient id yields an empty list, since
/// cross-resource referential integrity is not checked.
pub async fn list_by_patient(
    State(state): State<Arc<AppState<Appointment>>>,
    Path(patient_id): Path<String>,
) -> Json<Envelope<Vec<Appointment>>> {
    let records = state
        .repository
        .find_matching(Box::new(move |appointment: &Appointment| {
            appointment.patient_id == patient_id
        }))
        .await;

    Json(Envelope::with_list(records))
}
