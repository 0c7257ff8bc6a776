//! Route table shared by the resource services.

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::{
    domain::Resource,
    ui::handler::http::{
        create_resource, delete_resource, get_resource, health_check, list_resources,
        update_resource,
    },
    ui::state::AppState,
};

/// Build the uniform CRUD route table for one resource collection.
///
/// `collection` is the URL path segment, e.g. `"patients"` for
/// `/api/patients` and `/api/patients/{id}`. Service-specific routes and
/// the fallback are attached by the caller before `with_state`.
pub fn resource_router<R: Resource>(collection: &str) -> Router<Arc<AppState<R>>> {
    Router::new()
        .route("/health", get(health_check::<R>))
        .route(
            &format!("/api/{collection}"),
            get(list_resources::<R>).post(create_resource::<R>),
        )
        .route(
            &format!("/api/{collection}/{{id}}"),
            get(get_resource::<R>)
                .put(update_resource::<R>)
                .delete(delete_resource::<R>),
        )
}
