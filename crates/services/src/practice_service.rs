use hub_core::evaluator::{self, RuleSet};
use hub_core::model::{EvaluationResult, ResultHistory};
use tracing::{debug, info};

use crate::Clock;

/// Runs practice submissions through the heuristic evaluator.
#[derive(Clone)]
pub struct PracticeService {
    clock: Clock,
}

impl PracticeService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Evaluate a submission against a rule set, stamped with the service clock.
    ///
    /// Never fails: empty or oversized input becomes a failure result.
    #[must_use]
    pub fn evaluate(&self, input: &str, rule_set: RuleSet) -> EvaluationResult {
        let result = evaluator::evaluate(input, rule_set, self.clock.now());
        debug!(
            rule_set = %rule_set,
            input_chars = input.chars().count(),
            success = result.success,
            "practice submission evaluated"
        );
        result
    }

    /// Evaluate a submission and record it at the front of `history`.
    ///
    /// Returns the recorded result.
    pub fn submit(
        &self,
        history: &mut ResultHistory,
        input: &str,
        rule_set: RuleSet,
    ) -> EvaluationResult {
        let result = self.evaluate(input, rule_set);
        history.push(result.clone());
        info!(
            rule_set = %rule_set,
            success = result.success,
            history_len = history.len(),
            "practice result recorded"
        );
        result
    }
}
