use serde::{Deserialize, Serialize};

/// Raw text as typed into the two input fields. Recreated on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillInput {
    pub total_amount_text: String,
    pub person_count_text: String,
}

impl BillInput {
    pub fn new(total_amount_text: impl Into<String>, person_count_text: impl Into<String>) -> Self {
        Self {
            total_amount_text: total_amount_text.into(),
            person_count_text: person_count_text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitResult {
    /// Amount owed by each person, rounded to 2 decimal places.
    pub per_person_amount: f64,
    pub valid: bool,
}

impl SplitResult {
    pub const INVALID: SplitResult = SplitResult {
        per_person_amount: 0.0,
        valid: false,
    };
}

impl Default for SplitResult {
    fn default() -> Self {
        Self::INVALID
    }
}

/// The single durable record: last parsed inputs, saved as a pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedSettings {
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub person_count: i32,
}

impl PersistedSettings {
    pub fn new(total_amount: f64, person_count: i32) -> Self {
        Self {
            total_amount,
            person_count,
        }
    }
}
