//! Resource contract for the generic CRUD engine.
//!
//! A resource type declares its own wire shapes, required fields and merge
//! behaviour; the store and the handler layer stay generic over this trait.

use serde::{Serialize, de::DeserializeOwned};

use super::{
    error::ValidationError,
    value_object::{ResourceId, Timestamp},
};

/// Declarative schema of one managed resource type.
///
/// Implementations specialize the generic store and handler layer for a
/// concrete record shape: required fields, optional fields with their
/// defaults, and the display name used in response messages.
pub trait Resource: Clone + Send + Sync + Serialize + 'static {
    /// Wire shape of a create request body. Every field is optional at the
    /// deserialization boundary; `validate` decides which must be present.
    type CreateRequest: DeserializeOwned + Send + 'static;

    /// Wire shape of an update request body. Only fields supplied with a
    /// non-empty value overwrite the stored record.
    type Patch: DeserializeOwned + Send + 'static;

    /// Singular display name used in response messages (e.g. "Patient").
    const DISPLAY_NAME: &'static str;

    /// Check that all required creation fields are present and non-empty.
    fn validate(request: &Self::CreateRequest) -> Result<(), ValidationError>;

    /// Build a new record from a validated create request.
    ///
    /// `created_at` and `updated_at` are both set to `now`; declared
    /// defaults are applied to optional fields left unset.
    fn from_request(id: ResourceId, now: Timestamp, request: Self::CreateRequest) -> Self;

    /// Merge a partial update into the record (last-truthy-wins: empty or
    /// absent fields leave the stored value unchanged).
    fn merge(&mut self, patch: Self::Patch);

    /// The record identifier.
    fn id(&self) -> &ResourceId;

    /// Refresh the update timestamp.
    fn touch(&mut self, updated_at: Timestamp);

    /// Check whether a request field holds a usable (non-empty) value.
    fn has_value(field: &Option<String>) -> bool {
        field.as_deref().is_some_and(|value| !value.is_empty())
    }
}
