use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// How many evaluation results a practice panel keeps.
pub const HISTORY_LIMIT: usize = 5;

/// Outcome of one run of the code checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// The text exactly as submitted (untrimmed).
    pub input: String,
    pub output: String,
    pub success: bool,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationResult {
    #[must_use]
    pub fn success(input: impl Into<String>, output: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            success: true,
            evaluated_at: at,
        }
    }

    #[must_use]
    pub fn failure(input: impl Into<String>, output: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            success: false,
            evaluated_at: at,
        }
    }
}

/// Newest-first history capped at [`HISTORY_LIMIT`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultHistory {
    entries: VecDeque<EvaluationResult>,
}

impl ResultHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a result, dropping the oldest entries past the limit.
    pub fn push(&mut self, result: EvaluationResult) {
        self.entries.push_front(result);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvaluationResult> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
