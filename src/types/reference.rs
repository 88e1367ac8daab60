//! Reference data and session types supplied by external collaborators.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A selectable patient, as returned by the reference-data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: Uuid,
    pub full_name: String,
    pub document_number: Option<String>,
}

/// A selectable dental service, as returned by the reference-data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DentalService {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

/// Identifier of a persisted clinical-history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The authenticated clinician driving the form.
///
/// Passed explicitly into the controller at construction instead of being
/// read from ambient global state; the bearer token accompanies every
/// collaborator call and the identity is shown in the signature and
/// confirmation steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicianSession {
    pub doctor_name: String,
    pub license_number: String,
    pub role: String,
    pub bearer_token: String,
}

impl ClinicianSession {
    pub fn new(
        doctor_name: impl Into<String>,
        license_number: impl Into<String>,
        role: impl Into<String>,
        bearer_token: impl Into<String>,
    ) -> Self {
        Self {
            doctor_name: doctor_name.into(),
            license_number: license_number.into(),
            role: role.into(),
            bearer_token: bearer_token.into(),
        }
    }
}
