use dioxus::prelude::*;

/// Overlay and dialog chrome shared by every topic modal.
///
/// The frame has no close logic of its own; the ✕ button only calls
/// `on_close`.
#[component]
pub fn ModalFrame(title: &'static str, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "modal-overlay",
            div { class: "modal",
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

/// Learn / Practice switch used by topics with a practice area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LearnMode {
    #[default]
    Learn,
    Practice,
}

#[component]
pub fn ModeSwitch(
    mode: LearnMode,
    learn_label: &'static str,
    practice_label: &'static str,
    on_select: EventHandler<LearnMode>,
) -> Element {
    let class_for = move |target: LearnMode| {
        if mode == target {
            "mode-button active"
        } else {
            "mode-button"
        }
    };

    rsx! {
        div { class: "mode-switch",
            button {
                class: class_for(LearnMode::Learn),
                r#type: "button",
                onclick: move |_| on_select.call(LearnMode::Learn),
                "{learn_label}"
            }
            button {
                class: class_for(LearnMode::Practice),
                r#type: "button",
                onclick: move |_| on_select.call(LearnMode::Practice),
                "{practice_label}"
            }
        }
    }
}
