use hub_core::model::ResultHistory;

use super::time_fmt::format_clock_time;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeResultVm {
    pub output: String,
    pub status_class: &'static str,
    pub stamp: String,
}

/// Map a result history to display rows, newest first.
#[must_use]
pub fn map_practice_results(history: &ResultHistory) -> Vec<PracticeResultVm> {
    history
        .iter()
        .map(|result| PracticeResultVm {
            output: result.output.clone(),
            status_class: if result.success {
                "practice-result success"
            } else {
                "practice-result failure"
            },
            stamp: format_clock_time(result.evaluated_at),
        })
        .collect()
}
