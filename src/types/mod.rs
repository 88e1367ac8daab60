pub mod field;
pub mod form;
pub mod reference;
pub mod section;

pub use field::{ChoiceField, FieldPath, TagField, TextField};
pub use form::{FormModel, MedicalHistory, SIGNATURE_MAX_LEN, SIGNATURE_MIN_LEN};
pub use reference::{ClinicianSession, DentalService, PatientSummary, RecordId};
pub use section::{Section, SectionDescriptor};
