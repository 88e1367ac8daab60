//! Typed field paths for the intake form.
//!
//! Field references are a closed enumeration instead of dotted strings, so a
//! reference to a non-existent field is a compile error rather than a runtime
//! surprise. The dotted form is still available through [`FieldPath::as_str`]
//! for error keys and wire payloads.

use serde::{Deserialize, Serialize};

/// Every addressable field of the intake form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldPath {
    PatientId,
    Reason,
    Symptoms,
    Findings,
    Diagnosis,
    GeneralPathologies,
    CurrentMedication,
    PreviousTreatments,
    Allergies,
    AnesthesiaTolerance,
    BreathingCondition,
    CoagulationCondition,
    DentalServices,
    DoctorSignature,
}

impl FieldPath {
    /// All form fields in canonical order.
    pub fn all() -> &'static [FieldPath] {
        &[
            FieldPath::PatientId,
            FieldPath::Reason,
            FieldPath::Symptoms,
            FieldPath::Findings,
            FieldPath::Diagnosis,
            FieldPath::GeneralPathologies,
            FieldPath::CurrentMedication,
            FieldPath::PreviousTreatments,
            FieldPath::Allergies,
            FieldPath::AnesthesiaTolerance,
            FieldPath::BreathingCondition,
            FieldPath::CoagulationCondition,
            FieldPath::DentalServices,
            FieldPath::DoctorSignature,
        ]
    }

    /// Dotted path used as the error key and payload field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPath::PatientId => "patient_id",
            FieldPath::Reason => "reason",
            FieldPath::Symptoms => "symptoms",
            FieldPath::Findings => "findings",
            FieldPath::Diagnosis => "diagnosis",
            FieldPath::GeneralPathologies => "medical_history.general_pathologies",
            FieldPath::CurrentMedication => "medical_history.current_medication",
            FieldPath::PreviousTreatments => "medical_history.previous_treatments",
            FieldPath::Allergies => "medical_history.allergies",
            FieldPath::AnesthesiaTolerance => "medical_history.anesthesia_tolerance",
            FieldPath::BreathingCondition => "medical_history.breathing_condition",
            FieldPath::CoagulationCondition => "medical_history.coagulation_condition",
            FieldPath::DentalServices => "dental_services",
            FieldPath::DoctorSignature => "doctor_signature",
        }
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text consultation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextField {
    Reason,
    Symptoms,
    Findings,
    Diagnosis,
}

impl TextField {
    pub fn all() -> &'static [TextField] {
        &[
            TextField::Reason,
            TextField::Symptoms,
            TextField::Findings,
            TextField::Diagnosis,
        ]
    }
}

impl From<TextField> for FieldPath {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Reason => FieldPath::Reason,
            TextField::Symptoms => FieldPath::Symptoms,
            TextField::Findings => FieldPath::Findings,
            TextField::Diagnosis => FieldPath::Diagnosis,
        }
    }
}

/// Single-choice medical-history fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceField {
    AnesthesiaTolerance,
    BreathingCondition,
    CoagulationCondition,
}

impl ChoiceField {
    pub fn all() -> &'static [ChoiceField] {
        &[
            ChoiceField::AnesthesiaTolerance,
            ChoiceField::BreathingCondition,
            ChoiceField::CoagulationCondition,
        ]
    }
}

impl From<ChoiceField> for FieldPath {
    fn from(field: ChoiceField) -> Self {
        match field {
            ChoiceField::AnesthesiaTolerance => FieldPath::AnesthesiaTolerance,
            ChoiceField::BreathingCondition => FieldPath::BreathingCondition,
            ChoiceField::CoagulationCondition => FieldPath::CoagulationCondition,
        }
    }
}

/// Tag-set medical-history fields.
///
/// Each carries a sentinel tag meaning "none applies", mutually exclusive
/// with every other tag in the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagField {
    GeneralPathologies,
    CurrentMedication,
    PreviousTreatments,
    Allergies,
}

impl TagField {
    pub fn all() -> &'static [TagField] {
        &[
            TagField::GeneralPathologies,
            TagField::CurrentMedication,
            TagField::PreviousTreatments,
            TagField::Allergies,
        ]
    }

    /// The "none applies" tag for this set. Gendered to match the Spanish
    /// label of each field.
    pub fn sentinel(&self) -> &'static str {
        match self {
            TagField::GeneralPathologies => "ninguna",
            TagField::CurrentMedication => "ninguno",
            TagField::PreviousTreatments => "ninguno",
            TagField::Allergies => "ninguna",
        }
    }
}

impl From<TagField> for FieldPath {
    fn from(field: TagField) -> Self {
        match field {
            TagField::GeneralPathologies => FieldPath::GeneralPathologies,
            TagField::CurrentMedication => FieldPath::CurrentMedication,
            TagField::PreviousTreatments => FieldPath::PreviousTreatments,
            TagField::Allergies => FieldPath::Allergies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_paths_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for field in FieldPath::all() {
            assert!(seen.insert(field.as_str()), "duplicate path {field}");
        }
    }

    #[test]
    fn sub_enums_cover_their_field_paths() {
        assert_eq!(TextField::all().len(), 4);
        assert_eq!(ChoiceField::all().len(), 3);
        assert_eq!(TagField::all().len(), 4);
        assert_eq!(FieldPath::all().len(), 14);
    }
}
