//! Modal state handles and the intents that change them.
//!
//! Each view keeps its signals in a `Copy` handle, and every change goes
//! through a dispatcher callback, so a click and a direct intent run the
//! same code.

use dioxus::prelude::*;
use hub_core::evaluator::RuleSet;
use hub_core::model::{DEFAULT_STUDENT_AGE, ResultHistory, Roster, StudentDraft, TopicId};
use tracing::info;

use crate::context::AppContext;
use crate::views::modal::LearnMode;
use crate::vm::{ShellState, parse_student_age};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellIntent {
    Open(TopicId),
    Close(TopicId),
}

/// Shell state for the hub, seeded with the launch topic and provided as context.
pub fn use_shell_state() -> Signal<ShellState> {
    let ctx = use_context::<AppContext>();
    use_context_provider(move || {
        let mut state = ShellState::new(ctx.modal_policy());
        if let Some(topic) = ctx.take_open_on_launch() {
            if state.open(topic) {
                info!(topic = %topic, "opened topic on launch");
            }
        }
        Signal::new(state)
    })
}

pub fn use_shell_dispatcher(shell: Signal<ShellState>) -> Callback<ShellIntent> {
    use_callback(move |intent: ShellIntent| {
        let mut shell = shell;
        match intent {
            ShellIntent::Open(topic) => {
                if shell.write().open(topic) {
                    info!(topic = %topic, "modal opened");
                }
            }
            ShellIntent::Close(topic) => {
                shell.write().close(topic);
                info!(topic = %topic, "modal closed");
            }
        }
    })
}

/// Per-modal navigation and practice state.
#[derive(Clone, Copy, PartialEq)]
pub struct TopicState {
    pub mode: Signal<LearnMode>,
    /// Position of the selected lesson, tab, section or video.
    pub active: Signal<usize>,
    pub code: Signal<String>,
    pub history: Signal<ResultHistory>,
}

pub fn use_topic_state() -> TopicState {
    TopicState {
        mode: use_signal(LearnMode::default),
        active: use_signal(|| 0usize),
        code: use_signal(String::new),
        history: use_signal(ResultHistory::new),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicIntent {
    /// Any position is accepted; an out-of-range one renders nothing.
    Select(usize),
    SwitchMode(LearnMode),
    /// Check the editor text and record the result.
    Run(RuleSet),
}

pub fn use_topic_dispatcher(state: TopicState) -> Callback<TopicIntent> {
    let practice = use_context::<AppContext>().practice();
    use_callback(move |intent: TopicIntent| {
        let TopicState {
            mut mode,
            mut active,
            code,
            mut history,
        } = state;
        match intent {
            TopicIntent::Select(index) => active.set(index),
            TopicIntent::SwitchMode(next) => mode.set(next),
            TopicIntent::Run(rule_set) => {
                let input = code();
                practice.submit(&mut history.write(), &input, rule_set);
            }
        }
    })
}

/// Student table, add form and query console of the database practice area.
#[derive(Clone, Copy, PartialEq)]
pub struct RosterState {
    pub roster: Signal<Roster>,
    pub name: Signal<String>,
    pub age: Signal<String>,
    pub course: Signal<String>,
    pub form_error: Signal<Option<String>>,
    pub query: Signal<String>,
    pub reply: Signal<String>,
}

pub fn use_roster_state() -> RosterState {
    RosterState {
        roster: use_signal(Roster::seeded),
        name: use_signal(String::new),
        age: use_signal(|| DEFAULT_STUDENT_AGE.to_string()),
        course: use_signal(String::new),
        form_error: use_signal(|| None::<String>),
        query: use_signal(String::new),
        reply: use_signal(String::new),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterIntent {
    AddStudent,
    RunQuery,
}

pub fn use_roster_dispatcher(state: RosterState) -> Callback<RosterIntent> {
    let service = use_context::<AppContext>().roster();
    use_callback(move |intent: RosterIntent| {
        let RosterState {
            mut roster,
            mut name,
            mut age,
            mut course,
            mut form_error,
            query,
            mut reply,
        } = state;
        match intent {
            RosterIntent::AddStudent => {
                let draft = StudentDraft::new(name(), parse_student_age(&age()), course());
                match service.add_student(&mut roster.write(), draft) {
                    Ok(_) => {
                        name.set(String::new());
                        age.set(DEFAULT_STUDENT_AGE.to_string());
                        course.set(String::new());
                        form_error.set(None);
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
            }
            RosterIntent::RunQuery => {
                let text = query();
                let answer = service.run_query(&roster.read(), &text);
                reply.set(answer);
            }
        }
    })
}
