//! Collaborator contracts at the network boundary.
//!
//! The engine itself is synchronous and pure; only these two collaborators
//! perform I/O. Both receive the clinician session so implementations can
//! attach the bearer credential.

use crate::error::Result;
use crate::form::IntakeSubmission;
use crate::types::{ClinicianSession, DentalService, PatientSummary, RecordId};
use async_trait::async_trait;

/// Read-only reference data fetched once when the form mounts.
#[async_trait]
pub trait ReferenceDataProvider: Send + Sync {
    /// The patients the clinician may select.
    async fn list_patients(&self, session: &ClinicianSession) -> Result<Vec<PatientSummary>>;

    /// The dental services offered by the clinic.
    async fn list_dental_services(&self, session: &ClinicianSession)
    -> Result<Vec<DentalService>>;
}

/// Persistence of a fully validated clinical-history entry.
#[async_trait]
pub trait HistoryPersistence: Send + Sync {
    /// Store the entry; returns the created record id, or a structured error
    /// surfaced verbatim to the user.
    async fn create_history(
        &self,
        session: &ClinicianSession,
        submission: &IntakeSubmission,
    ) -> Result<RecordId>;
}
