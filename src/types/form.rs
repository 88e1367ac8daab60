//! The in-memory clinical-history draft.

use crate::types::{ChoiceField, TagField, TextField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Maximum accepted signature length; input beyond this is truncated.
pub const SIGNATURE_MAX_LEN: usize = 12;

/// Minimum valid signature length, checked at validation time.
pub const SIGNATURE_MIN_LEN: usize = 4;

/// One clinical-history entry being drafted.
///
/// Created empty when the form view mounts (optionally pre-populated with a
/// patient reference from the route), mutated exclusively through input
/// handlers, and reset on successful submission. Validation, progress and
/// section state are always derived from this record, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormModel {
    pub patient_id: Option<Uuid>,
    pub reason: String,
    pub symptoms: String,
    pub findings: String,
    pub diagnosis: String,
    pub medical_history: MedicalHistory,
    pub dental_services: BTreeSet<Uuid>,
    pub doctor_signature: String,
}

/// Nested medical-history record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub general_pathologies: BTreeSet<String>,
    pub current_medication: BTreeSet<String>,
    pub previous_treatments: BTreeSet<String>,
    pub allergies: BTreeSet<String>,
    pub anesthesia_tolerance: String,
    pub breathing_condition: String,
    pub coagulation_condition: String,
}

impl FormModel {
    /// Create an empty draft pre-populated with a patient reference.
    pub fn for_patient(patient_id: Uuid) -> Self {
        Self {
            patient_id: Some(patient_id),
            ..Default::default()
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Reason => &self.reason,
            TextField::Symptoms => &self.symptoms,
            TextField::Findings => &self.findings,
            TextField::Diagnosis => &self.diagnosis,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Reason => self.reason = value,
            TextField::Symptoms => self.symptoms = value,
            TextField::Findings => self.findings = value,
            TextField::Diagnosis => self.diagnosis = value,
        }
    }

    pub fn choice(&self, field: ChoiceField) -> &str {
        match field {
            ChoiceField::AnesthesiaTolerance => &self.medical_history.anesthesia_tolerance,
            ChoiceField::BreathingCondition => &self.medical_history.breathing_condition,
            ChoiceField::CoagulationCondition => &self.medical_history.coagulation_condition,
        }
    }

    pub fn set_choice(&mut self, field: ChoiceField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ChoiceField::AnesthesiaTolerance => self.medical_history.anesthesia_tolerance = value,
            ChoiceField::BreathingCondition => self.medical_history.breathing_condition = value,
            ChoiceField::CoagulationCondition => self.medical_history.coagulation_condition = value,
        }
    }

    pub fn tags(&self, field: TagField) -> &BTreeSet<String> {
        match field {
            TagField::GeneralPathologies => &self.medical_history.general_pathologies,
            TagField::CurrentMedication => &self.medical_history.current_medication,
            TagField::PreviousTreatments => &self.medical_history.previous_treatments,
            TagField::Allergies => &self.medical_history.allergies,
        }
    }

    pub fn tags_mut(&mut self, field: TagField) -> &mut BTreeSet<String> {
        match field {
            TagField::GeneralPathologies => &mut self.medical_history.general_pathologies,
            TagField::CurrentMedication => &mut self.medical_history.current_medication,
            TagField::PreviousTreatments => &mut self.medical_history.previous_treatments,
            TagField::Allergies => &mut self.medical_history.allergies,
        }
    }

    /// Set the doctor signature, truncating to [`SIGNATURE_MAX_LEN`]
    /// characters as the input widget does.
    pub fn set_signature(&mut self, value: &str) {
        self.doctor_signature = value.chars().take(SIGNATURE_MAX_LEN).collect();
    }

    /// Discard all entered data.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
