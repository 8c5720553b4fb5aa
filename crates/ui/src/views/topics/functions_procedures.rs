use dioxus::prelude::*;
use hub_core::content::functions_procedures::{TABS, TIPS, TITLE, practice_for};
use hub_core::evaluator::RuleSet;

use crate::views::lesson::{SectionList, TabStrip};
use crate::views::modal::{LearnMode, ModalFrame, ModeSwitch};
use crate::views::practice::PracticePanel;
use crate::views::state::{TopicIntent, TopicState, use_topic_dispatcher, use_topic_state};
use crate::vm::TabsVm;

#[component]
pub fn FunctionsProceduresModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let state = use_topic_state();
    let dispatch = use_topic_dispatcher(state);

    if !is_open {
        return rsx! {};
    }

    rsx! {
        ModalFrame { title: TITLE, on_close,
            FunctionsProceduresBody { state, dispatch }
        }
    }
}

#[component]
pub fn FunctionsProceduresBody(state: TopicState, dispatch: Callback<TopicIntent>) -> Element {
    let mode = *state.mode.read();
    let active_index = *state.active.read();
    let tabs = TabsVm::new(TABS, active_index);
    // The tab strip drives both the lesson shown and the rule set checked.
    let rule_set = tabs
        .active
        .and_then(|tab| tab.key.parse::<RuleSet>().ok())
        .unwrap_or(RuleSet::Basics);
    let guidance = practice_for(rule_set);
    let placeholder = guidance.map_or_else(String::new, |entry| {
        format!("' Example template based on {rule_set}:\n{}", entry.template)
    });

    rsx! {
        ModeSwitch {
            mode,
            learn_label: "Learn",
            practice_label: "Practice",
            on_select: move |next| dispatch.call(TopicIntent::SwitchMode(next)),
        }
        TabStrip {
            labels: tabs.labels,
            active: active_index,
            on_select: move |index| dispatch.call(TopicIntent::Select(index)),
        }
        if mode == LearnMode::Learn {
            if let Some(active) = tabs.active {
                div { class: "learn-area",
                    h3 { class: "learn-heading", "{active.heading}" }
                    SectionList { sections: active.sections }
                }
            }
        } else {
            section { class: "practice-area",
                h3 { "Practice Area" }
                label { class: "practice-label",
                    "Write your VB.NET code here based on the selected topic:"
                }
                if let Some(entry) = guidance {
                    p { class: "practice-prompt", "{entry.prompt}" }
                }
                PracticePanel { rule_set, placeholder, state, dispatch }
            }
            section { class: "practice-tips",
                h3 { "Tips for Practice" }
                SectionList { sections: TIPS }
            }
        }
    }
}
