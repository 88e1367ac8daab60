//! # Clinical Intake
//!
//! A form-state engine for multi-section dental clinical-history intake
//! forms: pure validation, completion progress, section navigation state,
//! and the submit state machine, with async collaborator traits at the
//! network boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use clinical_intake::*;
//!
//! let mut model = FormModel::default();
//! model.set_text(TextField::Reason, "Dolor agudo en molar inferior");
//!
//! let outcome = validate(&model);
//! assert!(!outcome.is_valid());
//!
//! let percent = compute_progress(&model);
//! assert!(percent > 0.0 && percent < 100.0);
//!
//! let sections = compute_sections(&model, false);
//! assert_eq!(sections.len(), 6);
//! ```

pub mod error;
pub mod form;
pub mod progress;
pub mod provider;
pub mod sections;
pub mod types;
pub mod validation;

pub use error::Result; // Our Result type takes precedence
pub use error::IntakeError;
pub use form::{FormPhase, IntakeFormController, IntakeSubmission, SubmitAttempt};
pub use progress::{TRACKED_SLOT_COUNT, completed_slots, compute_progress};
pub use provider::{HistoryPersistence, ReferenceDataProvider};
pub use sections::{compute_sections, first_incomplete, section_completed};
pub use types::*;
pub use validation::{ValidationIssue, ValidationOutcome, validate, validate_field};
