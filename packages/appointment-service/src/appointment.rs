//! Appointment record and its wire shapes.

use serde::{Deserialize, Serialize};

use karte_core::Resource;
use karte_core::domain::{ResourceId, Timestamp, ValidationError, merge};

/// Required creation fields, as listed in the validation message.
const REQUIRED_FIELDS: &str = "PatientId, doctorName, appointmentDate, and appointmentTime";

/// Status assigned to every newly created appointment.
const DEFAULT_STATUS: &str = "scheduled";

/// A scheduled appointment for a patient.
///
/// `status` is a free-form caller-controlled field; the service does not
/// validate or restrict its transitions. The referenced `patient_id` is
/// not checked against the patient service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: ResourceId,
    pub patient_id: String,
    pub doctor_name: String,
    pub appointment_date: String,
    pub appointment_time: String,
    /// Optional visit reason; serialized as an explicit `null` when absent
    pub reason: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create request body. Required fields are checked by `validate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub patient_id: Option<String>,
    pub doctor_name: Option<String>,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    pub reason: Option<String>,
}

/// Partial update body; only non-empty fields overwrite the record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPatch {
    pub patient_id: Option<String>,
    pub doctor_name: Option<String>,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    pub reason: Option<String>,
    pub status: Option<String>,
}

impl Resource for Appointment {
    type CreateRequest = CreateAppointmentRequest;
    type Patch = AppointmentPatch;

    const DISPLAY_NAME: &'static str = "Appointment";

    fn validate(request: &Self::CreateRequest) -> Result<(), ValidationError> {
        let required = [
            &request.patient_id,
            &request.doctor_name,
            &request.appointment_date,
            &request.appointment_time,
        ];
        if required.iter().any(|field| !Self::has_value(field)) {
            return Err(ValidationError::MissingRequiredFields(REQUIRED_FIELDS));
        }
        Ok(())
    }

    fn from_request(id: ResourceId, now: Timestamp, request: Self::CreateRequest) -> Self {
        Self {
            id,
            patient_id: request.patient_id.unwrap_or_default(),
            doctor_name: request.doctor_name.unwrap_or_default(),
            appointment_date: request.appointment_date.unwrap_or_default(),
            appointment_time: request.appointment_time.unwrap_or_default(),
            reason: request.reason.filter(|reason| !reason.is_empty()),
            status: DEFAULT_STATUS.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    fn merge(&mut self, patch: Self::Patch) {
        merge::overwrite(&mut self.patient_id, patch.patient_id);
        merge::overwrite(&mut self.doctor_name, patch.doctor_name);
        merge::overwrite(&mut self.appointment_date, patch.appointment_date);
        merge::overwrite(&mut self.appointment_time, patch.appointment_time);
        merge::overwrite_optional(&mut self.reason, patch.reason);
        merge::overwrite(&mut self.status, patch.status);
    }

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn touch(&mut self, updated_at: Timestamp) {
        self.updated_at = updated_at;
    }
}
