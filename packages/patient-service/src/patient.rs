//! Patient record and its wire shapes.

use serde::{Deserialize, Serialize};

use karte_core::Resource;
use karte_core::domain::{ResourceId, Timestamp, ValidationError, merge};

/// Required creation fields, as listed in the validation message.
const REQUIRED_FIELDS: &str = "Name and email";

/// A registered patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: ResourceId,
    pub name: String,
    pub email: String,
    /// Optional contact and demographic fields; serialized as explicit
    /// `null` when absent
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create request body. Required fields are checked by `validate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
}

/// Partial update body; only non-empty fields overwrite the record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
}

impl Resource for Patient {
    type CreateRequest = CreatePatientRequest;
    type Patch = PatientPatch;

    const DISPLAY_NAME: &'static str = "Patient";

    fn validate(request: &Self::CreateRequest) -> Result<(), ValidationError> {
        if !Self::has_value(&request.name) || !Self::has_value(&request.email) {
            return Err(ValidationError::MissingRequiredFields(REQUIRED_FIELDS));
        }
        Ok(())
    }

    fn from_request(id: ResourceId, now: Timestamp, request: Self::CreateRequest) -> Self {
        Self {
            id,
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            phone: request.phone.filter(|phone| !phone.is_empty()),
            date_of_birth: request.date_of_birth.filter(|dob| !dob.is_empty()),
            address: request.address.filter(|address| !address.is_empty()),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    fn merge(&mut self, patch: Self::Patch) {
        merge::overwrite(&mut self.name, patch.name);
        merge::overwrite(&mut self.email, patch.email);
        merge::overwrite_optional(&mut self.phone, patch.phone);
        merge::overwrite_optional(&mut self.date_of_birth, patch.date_of_birth);
        merge::overwrite_optional(&mut self.address, patch.address);
    }

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn touch(&mut self, updated_at: Timestamp) {
        self.updated_at = updated_at;
    }
}
