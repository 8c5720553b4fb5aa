use dioxus::prelude::*;
use hub_core::content::libraries_modules::{SECTIONS, TITLE};

use crate::views::lesson::{SectionPanel, TabStrip};
use crate::views::modal::ModalFrame;
use crate::views::state::{TopicIntent, TopicState, use_topic_dispatcher, use_topic_state};

#[component]
pub fn LibrariesModulesModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let state = use_topic_state();
    let dispatch = use_topic_dispatcher(state);

    if !is_open {
        return rsx! {};
    }

    rsx! {
        ModalFrame { title: TITLE, on_close,
            LibrariesModulesBody { state, dispatch }
        }
    }
}

#[component]
pub fn LibrariesModulesBody(state: TopicState, dispatch: Callback<TopicIntent>) -> Element {
    let active = *state.active.read();
    let labels = SECTIONS.iter().map(|section| section.title).collect::<Vec<_>>();

    rsx! {
        TabStrip {
            labels,
            active,
            on_select: move |index| dispatch.call(TopicIntent::Select(index)),
        }
        SectionPanel { sections: SECTIONS, index: active }
    }
}
