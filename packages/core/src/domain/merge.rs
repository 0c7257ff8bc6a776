//! Merge policy for partial updates.
//!
//! Updates follow a last-truthy-wins rule: a field only overwrites the
//! stored value when the caller supplied a non-empty string. An empty or
//! absent field keeps the previous value, so a record field can never be
//! cleared through an update.

/// Overwrite a required field when the patch carries a non-empty value.
pub fn overwrite(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            *field = value;
        }
    }
}

/// Overwrite an optional field when the patch carries a non-empty value.
pub fn overwrite_optional(field: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            *field = Some(value);
        }
    }
}
