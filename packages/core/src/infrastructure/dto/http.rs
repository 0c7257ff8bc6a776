//! HTTP API response DTOs shared by all resource services.

use serde::{Deserialize, Serialize};

/// Uniform response envelope for every endpoint.
///
/// Keys that do not apply to an outcome are omitted from the JSON
/// entirely; optional fields inside `data` keep explicit `null` markers
/// instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> Envelope<T> {
    /// Success carrying a single record (read-one).
    pub fn with_data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
        }
    }

    /// Success carrying a record and a confirmation message (create, update).
    pub fn with_data_and_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            count: None,
        }
    }

    /// Success carrying a confirmation message only (delete).
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }

    /// Failure carrying an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Success carrying a sequence and its count (list, filter).
    pub fn with_list(records: Vec<T>) -> Self {
        let count = records.len();
        Self {
            success: true,
            data: Some(records),
            message: None,
            count: Some(count),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}
