//! Logical sections of the intake form and their derived descriptors.

use serde::{Deserialize, Serialize};

/// The six logical sections of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Patient,
    Consultation,
    MedicalHistory,
    Findings,
    Diagnosis,
    Signature,
}

impl Section {
    /// All sections in display order. The order is stable across calls; the
    /// hosting view relies on it to scroll to the first incomplete section.
    pub fn all() -> &'static [Section] {
        &[
            Section::Patient,
            Section::Consultation,
            Section::MedicalHistory,
            Section::Findings,
            Section::Diagnosis,
            Section::Signature,
        ]
    }

    /// Anchor id of the section in the hosting view.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Patient => "section-patient",
            Section::Consultation => "section-consultation",
            Section::MedicalHistory => "section-medical-history",
            Section::Findings => "section-findings",
            Section::Diagnosis => "section-diagnosis",
            Section::Signature => "section-signature",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Patient => "Paciente",
            Section::Consultation => "Consulta",
            Section::MedicalHistory => "Antecedentes médicos",
            Section::Findings => "Hallazgos clínicos",
            Section::Diagnosis => "Diagnóstico y tratamiento",
            Section::Signature => "Firma del odontólogo",
        }
    }

    /// Icon key understood by the hosting view.
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Patient => "user",
            Section::Consultation => "clipboard",
            Section::MedicalHistory => "heart-pulse",
            Section::Findings => "magnifier",
            Section::Diagnosis => "tooth",
            Section::Signature => "pen",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Derived navigation state for one section.
///
/// Recomputed from the form model on every change; never mutated directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionDescriptor {
    pub section: Section,
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub completed: bool,
    pub show_error: bool,
}
