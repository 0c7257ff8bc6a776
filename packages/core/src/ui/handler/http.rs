//! HTTP API endpoint handlers, generic over the managed resource type.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{Resource, ResourceRepository},
    error::ApiError,
    infrastructure::dto::http::{Envelope, HealthDto},
    time::now_rfc3339,
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check<R: Resource>(State(state): State<Arc<AppState<R>>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy".to_string(),
        service: state.service_name.to_string(),
        timestamp: now_rfc3339(),
    })
}

/// Get all records with their count
pub async fn list_resources<R: Resource>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<Envelope<Vec<R>>> {
    let records = state.repository.find_all().await;
    Json(Envelope::with_list(records))
}

/// Get one record by id
pub async fn get_resource<R: Resource>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<R>>, ApiError> {
    let record = state.repository.find_by_id(&id).await?;
    Ok(Json(Envelope::with_data(record)))
}

/// Create a new record
///
/// Validation runs before the store is touched; a request missing required
/// fields never mutates the collection.
pub async fn create_resource<R: Resource>(
    State(state): State<Arc<AppState<R>>>,
    Json(request): Json<R::CreateRequest>,
) -> Result<(StatusCode, Json<Envelope<R>>), ApiError> {
    R::validate(&request)?;
    let record = state.repository.insert(request).await;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data_and_message(
            record,
            format!("{} created successfully", R::DISPLAY_NAME),
        )),
    ))
}

/// Merge a partial update into an existing record
pub async fn update_resource<R: Resource>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(patch): Json<R::Patch>,
) -> Result<Json<Envelope<R>>, ApiError> {
    let record = state.repository.update(&id, patch).await?;
    Ok(Json(Envelope::with_data_and_message(
        record,
        format!("{} updated successfully", R::DISPLAY_NAME),
    )))
}

/// Delete a record by id
pub async fn delete_resource<R: Resource>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<R>>, ApiError> {
    state.repository.remove(&id).await?;
    Ok(Json(Envelope::with_message(format!(
        "{} deleted successfully",
        R::DISPLAY_NAME
    ))))
}

/// Fallback for unmatched routes
pub async fn route_not_found() -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::failure("Route not found")),
    )
}
