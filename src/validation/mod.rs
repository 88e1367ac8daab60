//! Pure field validation for the intake form.
//!
//! Twelve rules are checked: the four free-text consultation fields, the
//! doctor signature (required, then length bounds), the three single-choice
//! medical-history fields, and the four tag-set fields (non-empty, then
//! sentinel exclusivity). Patient selection and the dental-service picker
//! are gated by the form controller at submit time, matching the widgets
//! that own them.
//!
//! All checks are side-effect free and safe to run on every keystroke or
//! once at submit time; a field is valid exactly when no issue names it.

use crate::types::{ChoiceField, FieldPath, FormModel, TagField, TextField};
use crate::types::{SIGNATURE_MAX_LEN, SIGNATURE_MIN_LEN};
use serde::{Deserialize, Serialize};

/// One failed field rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: FieldPath,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: FieldPath, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result of validating a full form model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationOutcome {
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The message attached to a field, if it failed its rule.
    pub fn message_for(&self, field: FieldPath) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate the whole model. Issues come out in canonical field order.
pub fn validate(model: &FormModel) -> ValidationOutcome {
    let issues = FieldPath::all()
        .iter()
        .filter_map(|field| validate_field(model, *field))
        .collect();

    ValidationOutcome::from_issues(issues)
}

/// Validate a single field, for incremental revalidation on change.
///
/// `PatientId` and `DentalServices` always pass here; the controller gates
/// them before submission.
pub fn validate_field(model: &FormModel, field: FieldPath) -> Option<ValidationIssue> {
    match field {
        FieldPath::PatientId | FieldPath::DentalServices => None,
        FieldPath::Reason => validate_text(model, TextField::Reason),
        FieldPath::Symptoms => validate_text(model, TextField::Symptoms),
        FieldPath::Findings => validate_text(model, TextField::Findings),
        FieldPath::Diagnosis => validate_text(model, TextField::Diagnosis),
        FieldPath::GeneralPathologies => validate_tags(model, TagField::GeneralPathologies),
        FieldPath::CurrentMedication => validate_tags(model, TagField::CurrentMedication),
        FieldPath::PreviousTreatments => validate_tags(model, TagField::PreviousTreatments),
        FieldPath::Allergies => validate_tags(model, TagField::Allergies),
        FieldPath::AnesthesiaTolerance => validate_choice(model, ChoiceField::AnesthesiaTolerance),
        FieldPath::BreathingCondition => validate_choice(model, ChoiceField::BreathingCondition),
        FieldPath::CoagulationCondition => {
            validate_choice(model, ChoiceField::CoagulationCondition)
        }
        FieldPath::DoctorSignature => validate_signature(model),
    }
}

fn validate_text(model: &FormModel, field: TextField) -> Option<ValidationIssue> {
    if model.text(field).trim().is_empty() {
        Some(ValidationIssue::new(
            field.into(),
            "required",
            "Este campo es obligatorio",
        ))
    } else {
        None
    }
}

fn validate_choice(model: &FormModel, field: ChoiceField) -> Option<ValidationIssue> {
    if model.choice(field).trim().is_empty() {
        Some(ValidationIssue::new(
            field.into(),
            "choice-required",
            "Seleccione una opción",
        ))
    } else {
        None
    }
}

fn validate_tags(model: &FormModel, field: TagField) -> Option<ValidationIssue> {
    let tags = model.tags(field);

    if tags.is_empty() {
        return Some(ValidationIssue::new(
            field.into(),
            "empty-selection",
            "Seleccione al menos una opción",
        ));
    }

    // The sentinel means "none applies" and cannot coexist with real tags.
    let sentinel = field.sentinel();
    if tags.contains(sentinel) && tags.len() > 1 {
        return Some(ValidationIssue::new(
            field.into(),
            "sentinel-conflict",
            format!("\"{sentinel}\" no puede combinarse con otras opciones"),
        ));
    }

    None
}

// Required, too-short, too-long: mutually exclusive, first match wins.
fn validate_signature(model: &FormModel) -> Option<ValidationIssue> {
    let signature = model.doctor_signature.trim();
    let field = FieldPath::DoctorSignature;

    if signature.is_empty() {
        return Some(ValidationIssue::new(
            field,
            "signature-required",
            "La firma es obligatoria",
        ));
    }

    let len = signature.chars().count();
    if len < SIGNATURE_MIN_LEN {
        return Some(ValidationIssue::new(
            field,
            "signature-too-short",
            format!("La firma debe tener al menos {SIGNATURE_MIN_LEN} caracteres"),
        ));
    }
    if len > SIGNATURE_MAX_LEN {
        return Some(ValidationIssue::new(
            field,
            "signature-too-long",
            format!("La firma no puede exceder {SIGNATURE_MAX_LEN} caracteres"),
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_rules_are_mutually_exclusive() {
        let mut model = FormModel::default();

        model.doctor_signature = String::new();
        let issue = validate_signature(&model).expect("empty signature should fail");
        assert_eq!(issue.code, "signature-required");

        model.doctor_signature = "ab".into();
        let issue = validate_signature(&model).expect("short signature should fail");
        assert_eq!(issue.code, "signature-too-short");

        // Past the input-side truncation, validation still rejects on its own.
        model.doctor_signature = "abcdefghijklx".into();
        let issue = validate_signature(&model).expect("long signature should fail");
        assert_eq!(issue.code, "signature-too-long");
    }

    #[test]
    fn sentinel_alone_is_valid() {
        let mut model = FormModel::default();
        model.tags_mut(TagField::Allergies).insert("ninguna".into());
        assert!(validate_tags(&model, TagField::Allergies).is_none());
    }

    #[test]
    fn empty_check_precedes_sentinel_check() {
        let model = FormModel::default();
        let issue = validate_tags(&model, TagField::Allergies).expect("empty set should fail");
        assert_eq!(issue.code, "empty-selection");
    }
}
