pub mod controller;
pub mod payload;

pub use controller::{FormPhase, IntakeFormController, SubmitAttempt};
pub use payload::{IntakeSubmission, build_submission};
