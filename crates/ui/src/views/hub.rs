use dioxus::prelude::*;
use hub_core::model::{MenuColumn, TopicId};

use super::state::{ShellIntent, use_shell_dispatcher, use_shell_state};
use super::topics::{
    BasicConceptsModal, ControlStructuresModal, DatabaseProgrammingModal, DebuggingModal,
    FunctionsProceduresModal, LibrariesModulesModal, OopConceptsModal, WindowsFormsModal,
};
use crate::vm::ShellState;

#[component]
pub fn HubView() -> Element {
    let shell = use_shell_state();
    let dispatch = use_shell_dispatcher(shell);
    rsx! { HubMenu { shell, dispatch } }
}

/// Category menu plus one dialog per topic with content.
#[component]
pub fn HubMenu(shell: Signal<ShellState>, dispatch: Callback<ShellIntent>) -> Element {
    let columns = [MenuColumn::Left, MenuColumn::Right].map(|column| {
        let buttons = TopicId::in_column(column).map(|topic| {
            rsx! {
                CategoryButton {
                    key: "{topic}",
                    topic,
                    on_open: move |topic: TopicId| dispatch.call(ShellIntent::Open(topic)),
                }
            }
        });
        rsx! {
            div { class: "category-column", {buttons} }
        }
    });

    let dialogs = TopicId::ALL
        .into_iter()
        .filter(|topic| topic.has_content())
        .map(|topic| {
            let is_open = shell.read().is_open(topic);
            rsx! {
                TopicDialog {
                    key: "{topic}",
                    topic,
                    is_open,
                    on_close: move |_| dispatch.call(ShellIntent::Close(topic)),
                }
            }
        });

    rsx! {
        div { class: "hub",
            div { class: "category-menu", {columns.into_iter()} }
            {dialogs}
        }
    }
}

#[component]
fn CategoryButton(topic: TopicId, on_open: EventHandler<TopicId>) -> Element {
    let enabled = topic.has_content();
    let class = format!("category-button accent-{}", topic.accent());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: !enabled,
            onclick: move |_| on_open.call(topic),
            span { class: "category-icon", "{topic.icon()}" }
            span { class: "category-title", "{topic.title()}" }
            if !enabled {
                span { class: "category-badge", "Coming soon" }
            }
        }
    }
}

/// The modal behind a topic. Topics without content render nothing.
#[component]
pub fn TopicDialog(topic: TopicId, is_open: bool, on_close: EventHandler<()>) -> Element {
    match topic {
        TopicId::BasicConcepts => rsx! { BasicConceptsModal { is_open, on_close } },
        TopicId::ControlStructures => rsx! { ControlStructuresModal { is_open, on_close } },
        TopicId::FunctionsProcedures => rsx! { FunctionsProceduresModal { is_open, on_close } },
        TopicId::OopConcepts => rsx! { OopConceptsModal { is_open, on_close } },
        TopicId::LibrariesModules => rsx! { LibrariesModulesModal { is_open, on_close } },
        TopicId::WindowsForms => rsx! { WindowsFormsModal { is_open, on_close } },
        TopicId::DatabaseProgramming => rsx! { DatabaseProgrammingModal { is_open, on_close } },
        TopicId::Debugging => rsx! { DebuggingModal { is_open, on_close } },
        TopicId::Projects | TopicId::PracticeExercises => rsx! {},
    }
}
