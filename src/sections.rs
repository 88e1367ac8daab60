//! Derived navigation state for the six form sections.

use crate::types::{ChoiceField, FormModel, Section, SectionDescriptor, TagField};

/// Whether a section's fields are all filled in.
pub fn section_completed(model: &FormModel, section: Section) -> bool {
    match section {
        Section::Patient => model.patient_id.is_some(),
        Section::Consultation => {
            !model.reason.trim().is_empty() && !model.symptoms.trim().is_empty()
        }
        Section::MedicalHistory => {
            ChoiceField::all()
                .iter()
                .all(|field| !model.choice(*field).trim().is_empty())
                && TagField::all()
                    .iter()
                    .all(|field| !model.tags(*field).is_empty())
        }
        Section::Findings => !model.findings.trim().is_empty(),
        Section::Diagnosis => {
            !model.diagnosis.trim().is_empty() && !model.dental_services.is_empty()
        }
        Section::Signature => !model.doctor_signature.trim().is_empty(),
    }
}

/// Compute the descriptors for all sections, in stable display order.
///
/// `show_error` highlights incomplete sections only once a submission has
/// been attempted; it never alters the underlying `completed` predicate.
pub fn compute_sections(model: &FormModel, has_attempted_submit: bool) -> Vec<SectionDescriptor> {
    Section::all()
        .iter()
        .map(|section| {
            let completed = section_completed(model, *section);
            SectionDescriptor {
                section: *section,
                id: section.id(),
                label: section.label(),
                icon: section.icon(),
                completed,
                show_error: has_attempted_submit && !completed,
            }
        })
        .collect()
}

/// The first section whose predicate fails, used as the scroll target after
/// a rejected submission.
pub fn first_incomplete(model: &FormModel) -> Option<Section> {
    Section::all()
        .iter()
        .copied()
        .find(|section| !section_completed(model, *section))
}
