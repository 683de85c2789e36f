//! Validation for movement tuning values.

use crate::movement::MovementTuning;

/// A tunable that cannot be used as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningValidationError {
    pub field: &'static str,
    pub value: f32,
}

impl std::fmt::Display for TuningValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_finite() {
            write!(
                f,
                "Tuning field '{}' is negative ({}), treating it as no effect",
                self.field, self.value
            )
        } else {
            write!(
                f,
                "Tuning field '{}' is not a finite number, treating it as no effect",
                self.field
            )
        }
    }
}

impl std::error::Error for TuningValidationError {}

/// Validate every tunable. Returns a list of errors, empty if all values are usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<TuningValidationError> {
    tuning
        .fields()
        .into_iter()
        .filter(|(_, value)| !value.is_finite() || *value < 0.0)
        .map(|(field, value)| TuningValidationError { field, value })
        .collect()
}
