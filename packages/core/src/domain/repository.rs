//! Repository contract for resource stores.
//!
//! The handler layer depends on this trait, not on a concrete store
//! implementation (dependency inversion).

use async_trait::async_trait;

use super::{error::RepositoryError, resource::Resource};

/// Predicate over records for filtered scans.
pub type ResourcePredicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// Authoritative collection of records of one resource type.
///
/// The store owns identity assignment and the timestamp invariants:
/// `insert` generates the id and sets `created_at == updated_at`;
/// `update` refreshes `updated_at` on every successful match, even when no
/// field value actually changed.
#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// Construct and append a new record from a validated create request.
    async fn insert(&self, request: R::CreateRequest) -> R;

    /// All records in insertion order.
    async fn find_all(&self) -> Vec<R>;

    /// First record whose id equals `id` (case-sensitive exact match).
    async fn find_by_id(&self, id: &str) -> Result<R, RepositoryError>;

    /// All records satisfying `predicate`, in insertion order. An empty
    /// result is not an error.
    async fn find_matching(&self, predicate: ResourcePredicate<R>) -> Vec<R>;

    /// Merge `patch` into the record with the given id and refresh its
    /// update timestamp.
    async fn update(&self, id: &str, patch: R::Patch) -> Result<R, RepositoryError>;

    /// Remove the record with the given id, preserving the order of the
    /// remaining records.
    async fn remove(&self, id: &str) -> Result<(), RepositoryError>;
}
