use dioxus::prelude::*;
use hub_core::content::entry_at;
use hub_core::content::windows_forms::{TITLE, TUTORIALS};
use tracing::warn;

use crate::views::modal::ModalFrame;
use crate::views::state::{TopicIntent, TopicState, use_topic_dispatcher, use_topic_state};

const PLAYER_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn WindowsFormsModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let state = use_topic_state();
    let dispatch = use_topic_dispatcher(state);

    if !is_open {
        return rsx! {};
    }

    rsx! {
        ModalFrame { title: TITLE, on_close,
            WindowsFormsBody { state, dispatch }
        }
    }
}

#[component]
pub fn WindowsFormsBody(state: TopicState, dispatch: Callback<TopicIntent>) -> Element {
    let current = *state.active.read();
    let entries = TUTORIALS.iter().enumerate().map(|(index, video)| {
        let class = if index == current {
            "video-entry active"
        } else {
            "video-entry"
        };
        rsx! {
            button {
                key: "{index}",
                class: class,
                r#type: "button",
                onclick: move |_| dispatch.call(TopicIntent::Select(index)),
                h3 { class: "video-entry-title", "{video.title}" }
                p { class: "video-entry-description", "{video.description}" }
            }
        }
    });

    rsx! {
        div { class: "video-layout",
            div { class: "video-list", {entries} }
            VideoPanel { index: current }
        }
    }
}

/// Player, title and description for the tutorial at `index`.
#[component]
pub fn VideoPanel(index: usize) -> Element {
    let Some(video) = entry_at(TUTORIALS, index) else {
        return rsx! {};
    };

    let player = match video.embed_url() {
        Ok(url) => rsx! {
            iframe {
                class: "video-frame",
                src: "{url}",
                title: "{video.title}",
                allow: PLAYER_PERMISSIONS,
                allowfullscreen: true,
            }
        },
        Err(err) => {
            warn!(error = %err, "tutorial link rejected");
            rsx! {
                p { class: "video-unavailable", "This video is unavailable." }
            }
        }
    };

    rsx! {
        div { class: "video-player",
            {player}
            h3 { class: "video-title", "{video.title}" }
            p { class: "video-description", "{video.description}" }
        }
    }
}
