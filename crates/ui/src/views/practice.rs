use dioxus::prelude::*;
use hub_core::evaluator::RuleSet;

use crate::views::state::{TopicIntent, TopicState};
use crate::vm::map_practice_results;

/// Code editor, run button and the newest-first result list.
///
/// The editor text and history live in the owning modal's [`TopicState`] so
/// they survive tab switches.
#[component]
pub fn PracticePanel(
    rule_set: RuleSet,
    placeholder: String,
    state: TopicState,
    dispatch: Callback<TopicIntent>,
) -> Element {
    let mut code = state.code;
    let current = code();
    let rows = map_practice_results(&state.history.read());
    let has_results = !rows.is_empty();
    let results = rows.into_iter().enumerate().map(|(index, row)| {
        rsx! {
            div { key: "{index}", class: row.status_class,
                span { class: "practice-stamp", "{row.stamp}" }
                pre { class: "practice-output", "{row.output}" }
            }
        }
    });

    rsx! {
        div { class: "practice-panel",
            textarea {
                class: "code-input",
                spellcheck: "false",
                placeholder: "{placeholder}",
                value: "{current}",
                oninput: move |evt| code.set(evt.value()),
            }
            div { class: "practice-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(TopicIntent::Run(rule_set)),
                    "Run Code"
                }
            }
            if has_results {
                div { class: "practice-results",
                    h4 { "Results:" }
                    {results}
                }
            }
        }
    }
}
