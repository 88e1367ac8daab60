mod common;

use clinical_intake::*;
use common::complete_model;
use uuid::Uuid;

#[test]
fn section_order_is_stable() {
    let empty = compute_sections(&FormModel::default(), false);
    let full = compute_sections(&complete_model(Uuid::new_v4(), Uuid::new_v4()), true);

    let expected = [
        "section-patient",
        "section-consultation",
        "section-medical-history",
        "section-findings",
        "section-diagnosis",
        "section-signature",
    ];
    assert_eq!(empty.len(), 6);
    for (descriptor, id) in empty.iter().zip(expected) {
        assert_eq!(descriptor.id, id);
    }
    for (descriptor, id) in full.iter().zip(expected) {
        assert_eq!(descriptor.id, id);
    }
}

#[test]
fn show_error_requires_an_attempted_submit() {
    let model = FormModel::default();

    // Nothing is highlighted before the first submit attempt, complete or not.
    for descriptor in compute_sections(&model, false) {
        assert!(!descriptor.show_error, "{} highlighted early", descriptor.id);
    }

    // After an attempt, exactly the incomplete sections are highlighted.
    for descriptor in compute_sections(&model, true) {
        assert_eq!(descriptor.show_error, !descriptor.completed);
        assert!(descriptor.show_error, "{} should be incomplete", descriptor.id);
    }
}

#[test]
fn show_error_never_alters_completed() {
    let model = complete_model(Uuid::new_v4(), Uuid::new_v4());

    let calm = compute_sections(&model, false);
    let attempted = compute_sections(&model, true);
    for (a, b) in calm.iter().zip(&attempted) {
        assert_eq!(a.completed, b.completed);
        assert!(a.completed);
        assert!(!b.show_error);
    }
}

#[test]
fn consultation_needs_both_reason_and_symptoms() {
    let mut model = FormModel::default();
    model.set_text(TextField::Reason, "dolor");
    assert!(!section_completed(&model, Section::Consultation));

    model.set_text(TextField::Symptoms, "sensibilidad");
    assert!(section_completed(&model, Section::Consultation));
}

#[test]
fn medical_history_needs_all_seven_sub_fields() {
    let mut model = complete_model(Uuid::new_v4(), Uuid::new_v4());
    assert!(section_completed(&model, Section::MedicalHistory));

    model.tags_mut(TagField::CurrentMedication).clear();
    assert!(!section_completed(&model, Section::MedicalHistory));

    model.tags_mut(TagField::CurrentMedication).insert("ninguno".into());
    model.set_choice(ChoiceField::CoagulationCondition, " ");
    assert!(!section_completed(&model, Section::MedicalHistory));
}

#[test]
fn diagnosis_section_includes_service_selection() {
    let mut model = complete_model(Uuid::new_v4(), Uuid::new_v4());
    assert!(section_completed(&model, Section::Diagnosis));

    model.dental_services.clear();
    assert!(!section_completed(&model, Section::Diagnosis));
}

#[test]
fn first_incomplete_walks_in_display_order() {
    let service_id = Uuid::new_v4();

    let empty = FormModel::default();
    assert_eq!(first_incomplete(&empty), Some(Section::Patient));

    let mut model = complete_model(Uuid::new_v4(), service_id);
    assert_eq!(first_incomplete(&model), None);

    model.reason.clear();
    assert_eq!(first_incomplete(&model), Some(Section::Consultation));

    model.doctor_signature.clear();
    assert_eq!(first_incomplete(&model), Some(Section::Consultation));

    model.set_text(TextField::Reason, "dolor");
    assert_eq!(first_incomplete(&model), Some(Section::Signature));
}
