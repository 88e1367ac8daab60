//! Orchestration of one in-progress intake form.

use crate::error::{IntakeError, Result};
use crate::form::payload::{IntakeSubmission, build_submission};
use crate::progress::compute_progress;
use crate::provider::{HistoryPersistence, ReferenceDataProvider};
use crate::sections::{compute_sections, first_incomplete};
use crate::types::{
    ChoiceField, ClinicianSession, DentalService, FieldPath, FormModel, PatientSummary, RecordId,
    Section, SectionDescriptor, TagField, TextField,
};
use crate::validation::{ValidationIssue, validate, validate_field};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

/// Where the form currently is in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// The user is filling in fields.
    Editing,
    /// Validation passed; waiting on the legal/identity confirmation dialog.
    ConfirmingSignature,
    /// The persistence call is in flight; input is ignored.
    Submitting,
}

/// Result of a submit attempt from the Editing phase.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// Validation or the patient/services gate failed; the view should show
    /// the summary and scroll to the first incomplete section.
    Invalid {
        first_incomplete: Option<Section>,
        summary: String,
    },
    /// The model is clean; the confirmation dialog should open.
    AwaitingConfirmation,
}

/// Owns one [`FormModel`] and drives it through
/// `Editing → ConfirmingSignature → Submitting → (reset | Editing)`.
///
/// The session and both collaborators are injected at construction; nothing
/// here reads ambient state. All derived values (field issues, progress,
/// sections) are recomputed from the model on demand.
pub struct IntakeFormController {
    session: ClinicianSession,
    reference_data: Arc<dyn ReferenceDataProvider>,
    persistence: Arc<dyn HistoryPersistence>,
    model: FormModel,
    phase: FormPhase,
    has_attempted_submit: bool,
    issues: BTreeMap<FieldPath, ValidationIssue>,
    patients: Vec<PatientSummary>,
    services: Vec<DentalService>,
    banner: Option<String>,
}

impl IntakeFormController {
    pub fn new(
        session: ClinicianSession,
        reference_data: Arc<dyn ReferenceDataProvider>,
        persistence: Arc<dyn HistoryPersistence>,
    ) -> Self {
        Self::with_model(session, reference_data, persistence, FormModel::default())
    }

    /// Start from a pre-populated model, e.g. with a patient reference taken
    /// from the route.
    pub fn with_model(
        session: ClinicianSession,
        reference_data: Arc<dyn ReferenceDataProvider>,
        persistence: Arc<dyn HistoryPersistence>,
        model: FormModel,
    ) -> Self {
        Self {
            session,
            reference_data,
            persistence,
            model,
            phase: FormPhase::Editing,
            has_attempted_submit: false,
            issues: BTreeMap::new(),
            patients: Vec::new(),
            services: Vec::new(),
            banner: None,
        }
    }

    /// One-shot fetch of patients and dental services.
    ///
    /// Each fetch is attempted independently; whatever loaded is kept and a
    /// failure is surfaced through [`banner`](Self::banner), leaving the
    /// form usable in a degraded state.
    pub async fn load_reference_data(&mut self) -> Result<()> {
        let mut failures = Vec::new();

        match self.reference_data.list_patients(&self.session).await {
            Ok(patients) => self.patients = patients,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load patient list");
                failures.push(e.to_string());
            }
        }

        match self.reference_data.list_dental_services(&self.session).await {
            Ok(services) => self.services = services,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load dental services");
                failures.push(e.to_string());
            }
        }

        if failures.is_empty() {
            tracing::info!(
                patients = self.patients.len(),
                services = self.services.len(),
                "reference data loaded"
            );
            self.banner = None;
        } else {
            self.banner = Some(failures.join("; "));
        }

        Ok(())
    }

    // Field mutators. Each clears the field's previous issue and re-runs
    // that field's rule only; input is ignored while a submission is in
    // flight.

    pub fn set_text(&mut self, field: TextField, value: &str) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        self.model.set_text(field, value);
        self.revalidate(field.into());
    }

    pub fn set_choice(&mut self, field: ChoiceField, value: &str) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        self.model.set_choice(field, value);
        self.revalidate(field.into());
    }

    /// Toggle a tag in a tag-set field.
    ///
    /// Sentinel exclusivity is enforced here at selection time: picking the
    /// sentinel clears the other tags, picking a real tag drops the
    /// sentinel. The post-hoc validation rule still applies to models
    /// populated outside the controller.
    pub fn toggle_tag(&mut self, field: TagField, tag: &str) {
        if self.phase == FormPhase::Submitting {
            return;
        }

        let sentinel = field.sentinel();
        let tags = self.model.tags_mut(field);
        if tags.contains(tag) {
            tags.remove(tag);
        } else {
            if tag == sentinel {
                tags.clear();
            } else {
                tags.remove(sentinel);
            }
            tags.insert(tag.to_string());
        }

        self.revalidate(field.into());
    }

    pub fn select_patient(&mut self, patient_id: Uuid) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        self.model.patient_id = Some(patient_id);
    }

    pub fn toggle_service(&mut self, service_id: Uuid) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        if !self.model.dental_services.remove(&service_id) {
            self.model.dental_services.insert(service_id);
        }
    }

    pub fn set_signature(&mut self, value: &str) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        self.model.set_signature(value);
        self.revalidate(FieldPath::DoctorSignature);
    }

    /// Attempt to submit.
    ///
    /// Runs full validation plus the patient/services gate. On failure the
    /// controller stays in Editing, remembers that a submission was
    /// attempted, and reports the first incomplete section for the view to
    /// scroll to; no collaborator is touched. On success the confirmation
    /// step opens.
    pub fn begin_submit(&mut self) -> Result<SubmitAttempt> {
        if self.phase != FormPhase::Editing {
            return Err(IntakeError::invalid_state(
                "a submission is already in progress",
            ));
        }

        let outcome = validate(&self.model);
        let gate_ok = self.model.patient_id.is_some() && !self.model.dental_services.is_empty();

        if !outcome.is_valid() || !gate_ok {
            self.has_attempted_submit = true;
            self.issues = outcome
                .issues
                .into_iter()
                .map(|issue| (issue.field, issue))
                .collect();

            tracing::debug!(
                field_errors = self.issues.len(),
                gate_ok,
                "submission blocked by validation"
            );

            return Ok(SubmitAttempt::Invalid {
                first_incomplete: first_incomplete(&self.model),
                summary: "Complete los campos obligatorios antes de guardar".to_string(),
            });
        }

        self.phase = FormPhase::ConfirmingSignature;
        Ok(SubmitAttempt::AwaitingConfirmation)
    }

    /// Close the confirmation dialog without submitting. No side effects.
    pub fn cancel_confirmation(&mut self) {
        if self.phase == FormPhase::ConfirmingSignature {
            self.phase = FormPhase::Editing;
        }
    }

    /// Perform the confirmed submission.
    ///
    /// On success the model is reset to empty and the attempted flag
    /// cleared; on failure the collaborator's message is surfaced through
    /// [`banner`](Self::banner) and the model is kept intact so the user can
    /// retry without re-entering data.
    pub async fn confirm_submit(&mut self) -> Result<RecordId> {
        if self.phase != FormPhase::ConfirmingSignature {
            return Err(IntakeError::invalid_state(
                "no submission awaiting confirmation",
            ));
        }
        self.phase = FormPhase::Submitting;

        let submission = match build_submission(&self.model, &self.services) {
            Ok(submission) => submission,
            Err(e) => {
                self.phase = FormPhase::Editing;
                self.banner = Some(e.to_string());
                return Err(e);
            }
        };

        match self
            .persistence
            .create_history(&self.session, &submission)
            .await
        {
            Ok(record_id) => {
                tracing::info!(%record_id, "clinical history stored");
                self.model.reset();
                self.issues.clear();
                self.has_attempted_submit = false;
                self.banner = None;
                self.phase = FormPhase::Editing;
                Ok(record_id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "clinical history submission failed");
                self.banner = Some(e.to_string());
                self.phase = FormPhase::Editing;
                Err(e)
            }
        }
    }

    // Derived state and accessors.

    pub fn progress(&self) -> f64 {
        compute_progress(&self.model)
    }

    pub fn sections(&self) -> Vec<SectionDescriptor> {
        compute_sections(&self.model, self.has_attempted_submit)
    }

    pub fn field_error(&self, field: FieldPath) -> Option<&ValidationIssue> {
        self.issues.get(&field)
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn has_attempted_submit(&self) -> bool {
        self.has_attempted_submit
    }

    pub fn session(&self) -> &ClinicianSession {
        &self.session
    }

    pub fn patients(&self) -> &[PatientSummary] {
        &self.patients
    }

    pub fn dental_services(&self) -> &[DentalService] {
        &self.services
    }

    /// Top-level message from a failed load or submission, if any.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// The payload that would be submitted right now, for the confirmation
    /// dialog preview.
    pub fn preview_submission(&self) -> Result<IntakeSubmission> {
        build_submission(&self.model, &self.services)
    }

    fn revalidate(&mut self, field: FieldPath) {
        self.issues.remove(&field);
        if let Some(issue) = validate_field(&self.model, field) {
            self.issues.insert(field, issue);
        }
    }
}
