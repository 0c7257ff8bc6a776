//! Handler modules for HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::{
    create_resource, delete_resource, get_resource, health_check, list_resources,
    route_not_found, update_resource,
};
