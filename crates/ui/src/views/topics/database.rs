use dioxus::prelude::*;
use hub_core::content::database::{DATA_ACCESS_TEMPLATE, LEARN_SECTIONS, QUERY_PLACEHOLDER, TITLE};
use hub_core::evaluator::RuleSet;
use hub_core::model::Roster;

use crate::views::lesson::SectionList;
use crate::views::modal::{LearnMode, ModalFrame, ModeSwitch};
use crate::views::practice::PracticePanel;
use crate::views::state::{
    RosterIntent, RosterState, TopicIntent, TopicState, use_roster_dispatcher, use_roster_state,
    use_topic_dispatcher, use_topic_state,
};
use crate::vm::map_student_rows;

#[component]
pub fn DatabaseProgrammingModal(is_open: bool, on_close: EventHandler<()>) -> Element {
    let state = use_topic_state();
    let dispatch = use_topic_dispatcher(state);
    let roster = use_roster_state();
    let roster_dispatch = use_roster_dispatcher(roster);

    if !is_open {
        return rsx! {};
    }

    rsx! {
        ModalFrame { title: TITLE, on_close,
            DatabaseProgrammingBody { state, dispatch, roster, roster_dispatch }
        }
    }
}

#[component]
pub fn DatabaseProgrammingBody(
    state: TopicState,
    dispatch: Callback<TopicIntent>,
    roster: RosterState,
    roster_dispatch: Callback<RosterIntent>,
) -> Element {
    let mode = *state.mode.read();

    rsx! {
        ModeSwitch {
            mode,
            learn_label: "Learn Database Concepts",
            practice_label: "Practice Area",
            on_select: move |next| dispatch.call(TopicIntent::SwitchMode(next)),
        }
        if mode == LearnMode::Learn {
            SectionList { sections: LEARN_SECTIONS }
        } else {
            section { class: "practice-area",
                h3 { "Student Database Practice" }
                StudentTable { students: roster.roster }
                AddStudentForm { roster, dispatch: roster_dispatch }
                QueryConsole { roster, dispatch: roster_dispatch }
                div { class: "practice-block",
                    h4 { "Check Your ADO.NET Code" }
                    PracticePanel {
                        rule_set: RuleSet::DataAccess,
                        placeholder: DATA_ACCESS_TEMPLATE.to_string(),
                        state,
                        dispatch,
                    }
                }
            }
        }
    }
}

#[component]
fn StudentTable(students: Signal<Roster>) -> Element {
    let rows = map_student_rows(students.read().students());
    let body = rows.into_iter().map(|row| {
        rsx! {
            tr { key: "{row.id}",
                td { "{row.id}" }
                td { "{row.name}" }
                td { "{row.age}" }
                td { "{row.course}" }
            }
        }
    });

    rsx! {
        div { class: "practice-block",
            h4 { "Current Students" }
            table { class: "student-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Age" }
                        th { "Course" }
                    }
                }
                tbody { {body} }
            }
        }
    }
}

#[component]
fn AddStudentForm(roster: RosterState, dispatch: Callback<RosterIntent>) -> Element {
    let RosterState {
        mut name,
        mut age,
        mut course,
        form_error,
        ..
    } = roster;

    rsx! {
        div { class: "practice-block",
            h4 { "Add New Student" }
            div { class: "student-form",
                input {
                    r#type: "text",
                    placeholder: "Student Name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    r#type: "number",
                    placeholder: "Age",
                    value: "{age}",
                    oninput: move |evt| age.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Course",
                    value: "{course}",
                    oninput: move |evt| course.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(RosterIntent::AddStudent),
                    "Add Student"
                }
            }
            if let Some(message) = form_error() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}

#[component]
fn QueryConsole(roster: RosterState, dispatch: Callback<RosterIntent>) -> Element {
    let mut query = roster.query;
    let reply = roster.reply;
    let has_reply = !reply.read().is_empty();

    rsx! {
        div { class: "practice-block",
            h4 { "Practice SQL Queries" }
            textarea {
                class: "code-input",
                placeholder: QUERY_PLACEHOLDER,
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| dispatch.call(RosterIntent::RunQuery),
                "Execute Query"
            }
            if has_reply {
                pre { class: "query-result", "{reply}" }
            }
        }
    }
}
