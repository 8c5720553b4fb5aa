use dioxus::prelude::*;
use hub_core::content::debugging::{PRACTICE_HEADING, PRACTICE_SCENARIOS, TABS, TIPS, TITLE};

use crate::views::lesson::{SectionList, SectionView, TabStrip};
use crate::views::modal::{LearnMode, ModalFrame, ModeSwitch};
use crate::views::state::{TopicIntent, TopicState, use_topic_dispatcher, use_topic_state};
use crate::vm::TabsVm;

#[component]
pub fn DebuggingModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let state = use_topic_state();
    let dispatch = use_topic_dispatcher(state);

    if !is_open {
        return rsx! {};
    }

    rsx! {
        ModalFrame { title: TITLE, on_close,
            DebuggingBody { state, dispatch }
        }
    }
}

#[component]
pub fn DebuggingBody(state: TopicState, dispatch: Callback<TopicIntent>) -> Element {
    let mode = *state.mode.read();
    let active_index = *state.active.read();
    let tabs = TabsVm::new(TABS, active_index);

    rsx! {
        ModeSwitch {
            mode,
            learn_label: "Learn",
            practice_label: "Practice",
            on_select: move |next| dispatch.call(TopicIntent::SwitchMode(next)),
        }
        if mode == LearnMode::Learn {
            TabStrip {
                labels: tabs.labels,
                active: active_index,
                on_select: move |index| dispatch.call(TopicIntent::Select(index)),
            }
            if let Some(active) = tabs.active {
                div { class: "learn-area",
                    h3 { class: "learn-heading", "{active.heading}" }
                    SectionList { sections: active.sections }
                }
            }
        } else {
            section { class: "practice-area",
                h3 { "{PRACTICE_HEADING}" }
                SectionList { sections: PRACTICE_SCENARIOS }
                div { class: "practice-tips",
                    SectionView { section: TIPS }
                }
            }
        }
    }
}
