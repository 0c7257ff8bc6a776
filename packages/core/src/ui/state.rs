//! Server state shared across request handlers.

use std::sync::Arc;

use crate::domain::{Resource, ResourceRepository};

/// Shared application state for one resource service.
pub struct AppState<R: Resource> {
    /// Service name reported by the health endpoint
    pub service_name: &'static str,
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn ResourceRepository<R>>,
}

impl<R: Resource> AppState<R> {
    /// Create the state for a service backed by the given repository.
    pub fn new(service_name: &'static str, repository: Arc<dyn ResourceRepository<R>>) -> Self {
        Self {
            service_name,
            repository,
        }
    }
}
