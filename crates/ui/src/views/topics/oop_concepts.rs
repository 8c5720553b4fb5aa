use dioxus::prelude::*;
use hub_core::content::oop_concepts::{LESSONS, TITLE};

use crate::views::lesson::{LessonPanel, TabStrip};
use crate::views::modal::ModalFrame;
use crate::views::state::{TopicIntent, TopicState, use_topic_dispatcher, use_topic_state};

#[component]
pub fn OopConceptsModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let state = use_topic_state();
    let dispatch = use_topic_dispatcher(state);

    if !is_open {
        return rsx! {};
    }

    rsx! {
        ModalFrame { title: TITLE, on_close,
            OopConceptsBody { state, dispatch }
        }
    }
}

#[component]
pub fn OopConceptsBody(state: TopicState, dispatch: Callback<TopicIntent>) -> Element {
    let active = *state.active.read();
    let labels = LESSONS.iter().map(|lesson| lesson.title).collect::<Vec<_>>();

    rsx! {
        TabStrip {
            labels,
            active,
            on_select: move |index| dispatch.call(TopicIntent::Select(index)),
        }
        LessonPanel { lessons: LESSONS, index: active }
    }
}
