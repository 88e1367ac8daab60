//! The wire payload handed to the persistence collaborator.

use crate::error::{IntakeError, Result};
use crate::types::{DentalService, FormModel, MedicalHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fully validated clinical-history entry, formatted for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeSubmission {
    pub patient_id: Uuid,
    pub reason: String,
    pub symptoms: String,
    pub findings: String,
    pub diagnosis: String,
    pub medical_history: MedicalHistory,
    pub dental_services: Vec<Uuid>,
    pub treatment_note: String,
    /// Doubles as the doctor credential checked by the backend.
    pub doctor_signature: String,
    pub submitted_at: DateTime<Utc>,
}

/// Format the model for submission.
///
/// Free-text fields are trimmed, service ids come out sorted, and the
/// treatment note is derived from the names of the selected services as
/// resolved against the loaded reference data (unresolved ids are skipped).
///
/// The controller only calls this after its submit gate, but the required
/// patient and service selections are re-checked here since the model is
/// public.
pub fn build_submission(model: &FormModel, services: &[DentalService]) -> Result<IntakeSubmission> {
    let patient_id = model.patient_id.ok_or_else(|| {
        IntakeError::validation("cannot build a submission without a selected patient")
    })?;

    if model.dental_services.is_empty() {
        return Err(IntakeError::validation(
            "cannot build a submission without selected dental services",
        ));
    }

    let service_names: Vec<&str> = model
        .dental_services
        .iter()
        .filter_map(|id| services.iter().find(|service| service.id == *id))
        .map(|service| service.name.as_str())
        .collect();

    Ok(IntakeSubmission {
        patient_id,
        reason: model.reason.trim().to_string(),
        symptoms: model.symptoms.trim().to_string(),
        findings: model.findings.trim().to_string(),
        diagnosis: model.diagnosis.trim().to_string(),
        medical_history: model.medical_history.clone(),
        dental_services: model.dental_services.iter().copied().collect(),
        treatment_note: format!("Tratamiento propuesto: {}", service_names.join(", ")),
        doctor_signature: model.doctor_signature.trim().to_string(),
        submitted_at: Utc::now(),
    })
}
