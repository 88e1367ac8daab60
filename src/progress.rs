//! Completion percentage over the fixed tracked-field set.

use crate::types::{ChoiceField, FormModel, TagField, TextField};

/// Number of tracked slots: 5 scalar fields (four consultation texts plus
/// the signature), 3 medical-history choices, 4 tag sets.
pub const TRACKED_SLOT_COUNT: usize = 12;

/// How many tracked slots are complete.
///
/// A scalar slot is complete when its trimmed value is non-empty; a tag-set
/// slot when the set is non-empty. The signature slot ignores the length
/// bounds, which belong to validation.
pub fn completed_slots(model: &FormModel) -> usize {
    let mut completed = 0usize;

    for field in TextField::all() {
        if !model.text(*field).trim().is_empty() {
            completed += 1;
        }
    }

    if !model.doctor_signature.trim().is_empty() {
        completed += 1;
    }

    for field in ChoiceField::all() {
        if !model.choice(*field).trim().is_empty() {
            completed += 1;
        }
    }

    for field in TagField::all() {
        if !model.tags(*field).is_empty() {
            completed += 1;
        }
    }

    completed
}

/// Completion percentage in `[0.0, 100.0]`, derived purely from the model.
/// An empty model yields exactly 0.0 and a fully entered one exactly 100.0;
/// callers round for display.
pub fn compute_progress(model: &FormModel) -> f64 {
    completed_slots(model) as f64 / TRACKED_SLOT_COUNT as f64 * 100.0
}
