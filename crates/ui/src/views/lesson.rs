use dioxus::prelude::*;
use hub_core::content::entry_at;
use hub_core::model::{Lesson, LessonSection};

use crate::vm::{SectionVm, map_section};

/// One lesson section. Optional fields that are absent render nothing.
#[component]
pub fn SectionView(section: LessonSection) -> Element {
    let SectionVm {
        title,
        description,
        content_html,
        list_html,
        steps,
        examples,
        code,
        image_path,
    } = map_section(&section);

    rsx! {
        section { class: "lesson-section",
            h3 { class: "lesson-section-title", "{title}" }
            if let Some(description) = description {
                p { class: "lesson-description", "{description}" }
            }
            if let Some(html) = content_html {
                div { class: "lesson-prose", dangerous_inner_html: html }
            }
            if !list_html.is_empty() {
                ul { class: "lesson-list",
                    for item in list_html {
                        li { dangerous_inner_html: item }
                    }
                }
            }
            if !steps.is_empty() {
                ol { class: "lesson-steps",
                    for step in steps.iter() {
                        li { "{step}" }
                    }
                }
            }
            if !examples.is_empty() {
                ul { class: "lesson-examples",
                    for example in examples.iter() {
                        li { code { "{example}" } }
                    }
                }
            }
            if let Some(code) = code {
                pre { class: "code-block", "{code}" }
            }
            if let Some(src) = image_path {
                div { class: "lesson-image",
                    img { src: "{src}", alt: "{title}" }
                }
            }
        }
    }
}

#[component]
pub fn SectionList(sections: &'static [LessonSection]) -> Element {
    rsx! {
        div { class: "section-list",
            for section in sections.iter() {
                SectionView { section: *section }
            }
        }
    }
}

/// The section at `index`; nothing when out of range.
#[component]
pub fn SectionPanel(sections: &'static [LessonSection], index: usize) -> Element {
    let Some(section) = entry_at(sections, index) else {
        return rsx! {};
    };
    rsx! {
        div { class: "lesson-panel",
            SectionView { section: *section }
        }
    }
}

/// Every section of the lesson at `index`; nothing when out of range.
#[component]
pub fn LessonPanel(lessons: &'static [Lesson], index: usize) -> Element {
    let Some(lesson) = entry_at(lessons, index) else {
        return rsx! {};
    };
    rsx! {
        div { class: "lesson-panel",
            for section in lesson.sections.iter() {
                SectionView { section: *section }
            }
        }
    }
}

/// Row of buttons selecting a position in a store.
#[component]
pub fn TabStrip(labels: Vec<&'static str>, active: usize, on_select: EventHandler<usize>) -> Element {
    let buttons = labels.into_iter().enumerate().map(|(index, label)| {
        let class = if index == active { "tab-button active" } else { "tab-button" };
        rsx! {
            button {
                key: "{index}",
                class: class,
                r#type: "button",
                onclick: move |_| on_select.call(index),
                "{label}"
            }
        }
    });

    rsx! {
        div { class: "tab-strip", {buttons} }
    }
}
