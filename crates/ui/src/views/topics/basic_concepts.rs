use dioxus::prelude::*;
use hub_core::content::basic_concepts::{LESSONS, OVERVIEW, TITLE};

use crate::views::lesson::{LessonPanel, SectionList, TabStrip};
use crate::views::modal::ModalFrame;
use crate::views::state::{TopicIntent, TopicState, use_topic_dispatcher, use_topic_state};

#[component]
pub fn BasicConceptsModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let state = use_topic_state();
    let dispatch = use_topic_dispatcher(state);

    if !is_open {
        return rsx! {};
    }

    rsx! {
        ModalFrame { title: TITLE, on_close,
            BasicConceptsBody { state, dispatch }
        }
    }
}

#[component]
pub fn BasicConceptsBody(state: TopicState, dispatch: Callback<TopicIntent>) -> Element {
    let active = *state.active.read();
    let labels = LESSONS.iter().map(|lesson| lesson.title).collect::<Vec<_>>();

    rsx! {
        TabStrip {
            labels,
            active,
            on_select: move |index| dispatch.call(TopicIntent::Select(index)),
        }
        LessonPanel { lessons: LESSONS, index: active }
        div { class: "lesson-overview",
            SectionList { sections: OVERVIEW }
        }
    }
}
