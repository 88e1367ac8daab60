#![allow(dead_code)]

use async_trait::async_trait;
use clinical_intake::*;
use std::sync::Mutex;
use uuid::Uuid;

pub fn session() -> ClinicianSession {
    ClinicianSession::new("Dra. Elena Vargas", "COP-12345", "doctor", "token-abc")
}

pub fn sample_patients() -> Vec<PatientSummary> {
    vec![
        PatientSummary {
            id: Uuid::new_v4(),
            full_name: "Carlos Mendoza".into(),
            document_number: Some("0912345678".into()),
        },
        PatientSummary {
            id: Uuid::new_v4(),
            full_name: "Lucía Andrade".into(),
            document_number: None,
        },
    ]
}

pub fn sample_services() -> Vec<DentalService> {
    vec![
        DentalService {
            id: Uuid::new_v4(),
            name: "Limpieza dental".into(),
            price: 35.0,
        },
        DentalService {
            id: Uuid::new_v4(),
            name: "Extracción de molar".into(),
            price: 80.0,
        },
    ]
}

/// A model with every tracked slot and the patient/services gate satisfied.
pub fn complete_model(patient_id: Uuid, service_id: Uuid) -> FormModel {
    let mut model = FormModel::for_patient(patient_id);
    model.set_text(TextField::Reason, "Dolor agudo en molar inferior");
    model.set_text(TextField::Symptoms, "Sensibilidad al frío");
    model.set_text(TextField::Findings, "Caries profunda en pieza 36");
    model.set_text(TextField::Diagnosis, "Pulpitis irreversible");
    model.set_choice(ChoiceField::AnesthesiaTolerance, "buena");
    model.set_choice(ChoiceField::BreathingCondition, "normal");
    model.set_choice(ChoiceField::CoagulationCondition, "normal");
    model
        .tags_mut(TagField::GeneralPathologies)
        .insert("hipertensión".into());
    model
        .tags_mut(TagField::CurrentMedication)
        .insert("losartán".into());
    model
        .tags_mut(TagField::PreviousTreatments)
        .insert("ninguno".into());
    model.tags_mut(TagField::Allergies).insert("ninguna".into());
    model.dental_services.insert(service_id);
    model.set_signature("EVargas");
    model
}

/// Reference-data collaborator with switchable per-call failures.
pub struct StaticReferenceData {
    pub patients: Vec<PatientSummary>,
    pub services: Vec<DentalService>,
    pub fail_patients: bool,
    pub fail_services: bool,
}

impl StaticReferenceData {
    pub fn new(patients: Vec<PatientSummary>, services: Vec<DentalService>) -> Self {
        Self {
            patients,
            services,
            fail_patients: false,
            fail_services: false,
        }
    }
}

#[async_trait]
impl ReferenceDataProvider for StaticReferenceData {
    async fn list_patients(&self, _session: &ClinicianSession) -> Result<Vec<PatientSummary>> {
        if self.fail_patients {
            return Err(IntakeError::reference_data("patient service unavailable"));
        }
        Ok(self.patients.clone())
    }

    async fn list_dental_services(
        &self,
        _session: &ClinicianSession,
    ) -> Result<Vec<DentalService>> {
        if self.fail_services {
            return Err(IntakeError::reference_data("service catalog unavailable"));
        }
        Ok(self.services.clone())
    }
}

/// Persistence collaborator that records every call and can be told to fail.
pub struct RecordingPersistence {
    pub calls: Mutex<Vec<IntakeSubmission>>,
    pub fail_with: Option<String>,
}

impl RecordingPersistence {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl HistoryPersistence for RecordingPersistence {
    async fn create_history(
        &self,
        _session: &ClinicianSession,
        submission: &IntakeSubmission,
    ) -> Result<RecordId> {
        self.calls.lock().unwrap().push(submission.clone());
        match &self.fail_with {
            Some(message) => Err(IntakeError::submission(message.clone())),
            None => Ok(RecordId(Uuid::new_v4())),
        }
    }
}
