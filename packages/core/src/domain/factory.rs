//! Domain factories for creating resource identifiers.

use super::value_object::ResourceId;

/// Factory for generating ResourceId instances.
///
/// This factory encapsulates the logic for generating new record
/// identifiers, separating the generation concern from the validation
/// logic in ResourceId.
pub struct ResourceIdFactory;

impl ResourceIdFactory {
    /// Generate a new ResourceId with a random UUID v4.
    ///
    /// A generated UUID is never empty, so this cannot fail.
    pub fn generate() -> ResourceId {
        ResourceId::from_uuid(uuid::Uuid::new_v4())
    }
}
