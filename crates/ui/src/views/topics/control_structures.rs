use dioxus::prelude::*;
use hub_core::content::control_structures::{BEST_PRACTICES, TITLE};
use hub_core::demo::{
    AgeGroup, DEFAULT_AGE, DEFAULT_LOOP_COUNT, DemoKind, Grade, MAX_AGE, MAX_LOOP_COUNT,
    MIN_LOOP_COUNT, clamp_loop_count, for_snippet, if_explanation, if_snippet, loop_output,
    parse_age, select_snippet,
};

use crate::views::modal::ModalFrame;

#[component]
pub fn ControlStructuresModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let example = use_signal(|| DemoKind::IfThenElse);
    let age = use_signal(|| DEFAULT_AGE);
    let loop_count = use_signal(|| DEFAULT_LOOP_COUNT);
    let grade = use_signal(Grade::default);

    if !is_open {
        return rsx! {};
    }

    let active = example();
    let selector = DemoKind::ALL.into_iter().map(|kind| {
        let mut example = example;
        let class = if kind == active {
            "tab-button active"
        } else {
            "tab-button"
        };
        rsx! {
            button {
                key: "{kind.label()}",
                class: class,
                r#type: "button",
                onclick: move |_| example.set(kind),
                "{kind.label()}"
            }
        }
    });

    let demo = match active {
        DemoKind::IfThenElse => rsx! { IfDemo { age } },
        DemoKind::ForLoop => rsx! { ForDemo { loop_count } },
        DemoKind::SelectCase => rsx! { SelectDemo { grade } },
    };

    rsx! {
        ModalFrame { title: TITLE, on_close,
            div { class: "tab-strip", {selector} }
            div { class: "demo", {demo} }
            section { class: "lesson-section",
                h3 { "Best Practices" }
                ul { class: "lesson-list",
                    for practice in BEST_PRACTICES.iter() {
                        li { "{practice}" }
                    }
                }
            }
        }
    }
}

#[component]
fn IfDemo(age: Signal<u8>) -> Element {
    let mut age = age;
    let value = age();
    let group = AgeGroup::classify(value);
    let snippet = if_snippet(value);
    let explanation = if_explanation(value);

    rsx! {
        label { class: "demo-label", "Enter Age:" }
        input {
            class: "demo-input",
            r#type: "number",
            min: "0",
            max: "{MAX_AGE}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(parsed) = parse_age(&evt.value()) {
                    age.set(parsed);
                }
            },
        }
        pre { class: "code-block", "{snippet}" }
        p { class: "demo-output", "Output: {group.label()}" }
        h4 { "Example Explanation:" }
        p {
            "This example demonstrates nested If-Then-Else statements to categorize age groups:"
            span { class: "demo-explanation", " • {explanation}" }
        }
    }
}

#[component]
fn ForDemo(loop_count: Signal<u32>) -> Element {
    let mut loop_count = loop_count;
    let count = loop_count();
    let snippet = for_snippet(count);

    rsx! {
        label { class: "demo-label", "Loop Count:" }
        input {
            class: "demo-range",
            r#type: "range",
            min: "{MIN_LOOP_COUNT}",
            max: "{MAX_LOOP_COUNT}",
            value: "{count}",
            oninput: move |evt| {
                if let Ok(parsed) = evt.value().parse::<u32>() {
                    loop_count.set(clamp_loop_count(parsed));
                }
            },
        }
        span { class: "demo-range-value", "{count}" }
        pre { class: "code-block", "{snippet}" }
        p { class: "demo-output", "Output:" }
        for line in loop_output(count) {
            p { class: "demo-output-line", "{line}" }
        }
    }
}

#[component]
fn SelectDemo(grade: Signal<Grade>) -> Element {
    let mut grade = grade;
    let current = grade();
    let snippet = select_snippet(current);

    rsx! {
        label { class: "demo-label", "Select Grade:" }
        select {
            class: "demo-select",
            value: "{current}",
            onchange: move |evt| {
                if let Ok(parsed) = evt.value().parse::<Grade>() {
                    grade.set(parsed);
                }
            },
            for choice in Grade::ALL {
                option { value: "{choice}", selected: choice == current, "{choice}" }
            }
        }
        pre { class: "code-block", "{snippet}" }
        p { class: "demo-output", "Output: {current.message()}" }
    }
}
