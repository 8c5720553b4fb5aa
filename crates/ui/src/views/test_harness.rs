use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use hub_core::model::{Lesson, LessonSection, ModalPolicy, TopicId};
use hub_core::time::fixed_clock;
use services::{AppServices, PracticeService, RosterService};

use crate::context::{UiApp, build_app_context};
use crate::views::hub::HubMenu;
use crate::views::state::{
    RosterIntent, RosterState, ShellIntent, TopicIntent, TopicState, use_roster_dispatcher,
    use_roster_state, use_shell_dispatcher, use_shell_state, use_topic_dispatcher,
    use_topic_state,
};
use crate::views::topics::{
    BasicConceptsBody, DatabaseProgrammingBody, DebuggingBody, FunctionsProceduresBody,
    LibrariesModulesBody, OopConceptsBody, WindowsFormsBody,
};
use crate::views::{HubView, LessonPanel, SectionPanel, TopicDialog, VideoPanel};
use crate::vm::ShellState;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    modal_policy: ModalPolicy,
    open_on_launch: Option<TopicId>,
}

impl UiApp for TestApp {
    fn modal_policy(&self) -> ModalPolicy {
        self.modal_policy
    }

    fn open_on_launch(&self) -> Option<TopicId> {
        self.open_on_launch
    }

    fn practice(&self) -> Arc<PracticeService> {
        self.services.practice()
    }

    fn roster(&self) -> Arc<RosterService> {
        self.services.roster()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Hub,
    /// The hub menu with its shell handles registered.
    DrivenHub,
    /// A topic modal rendered open on its own.
    Topic(TopicId),
    /// A topic body with its state handles registered.
    DrivenTopic(TopicId),
    Lesson(&'static [Lesson], usize),
    Section(&'static [LessonSection], usize),
    Video(usize),
}

/// Signals and dispatchers registered by the driven views.
#[derive(Clone, Default)]
pub struct HarnessHandles {
    shell: Rc<RefCell<Option<Signal<ShellState>>>>,
    shell_dispatch: Rc<RefCell<Option<Callback<ShellIntent>>>>,
    topic: Rc<RefCell<Option<TopicState>>>,
    topic_dispatch: Rc<RefCell<Option<Callback<TopicIntent>>>>,
    roster: Rc<RefCell<Option<RosterState>>>,
    roster_dispatch: Rc<RefCell<Option<Callback<RosterIntent>>>>,
}

impl HarnessHandles {
    pub fn shell(&self) -> Signal<ShellState> {
        self.shell.borrow().expect("shell registered")
    }

    pub fn shell_dispatch(&self) -> Callback<ShellIntent> {
        self.shell_dispatch.borrow().expect("shell dispatch registered")
    }

    pub fn topic(&self) -> TopicState {
        self.topic.borrow().expect("topic state registered")
    }

    pub fn topic_dispatch(&self) -> Callback<TopicIntent> {
        self.topic_dispatch.borrow().expect("topic dispatch registered")
    }

    pub fn roster(&self) -> RosterState {
        self.roster.borrow().expect("roster state registered")
    }

    pub fn roster_dispatch(&self) -> Callback<RosterIntent> {
        self.roster_dispatch
            .borrow()
            .expect("roster dispatch registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Hub => rsx! { HubView {} },
        ViewKind::DrivenHub => rsx! { DrivenHub {} },
        ViewKind::Topic(topic) => rsx! { TopicDialog { topic, is_open: true, on_close: move |_| {} } },
        ViewKind::DrivenTopic(topic) => rsx! { DrivenTopic { topic } },
        ViewKind::Lesson(lessons, index) => rsx! { LessonPanel { lessons, index } },
        ViewKind::Section(sections, index) => rsx! { SectionPanel { sections, index } },
        ViewKind::Video(index) => rsx! { VideoPanel { index } },
    }
}

#[component]
fn DrivenHub() -> Element {
    let handles = use_context::<HarnessHandles>();
    let shell = use_shell_state();
    let dispatch = use_shell_dispatcher(shell);
    use_hook(|| {
        *handles.shell.borrow_mut() = Some(shell);
        *handles.shell_dispatch.borrow_mut() = Some(dispatch);
    });
    rsx! { HubMenu { shell, dispatch } }
}

#[component]
fn DrivenTopic(topic: TopicId) -> Element {
    let handles = use_context::<HarnessHandles>();
    let state = use_topic_state();
    let dispatch = use_topic_dispatcher(state);
    let roster = use_roster_state();
    let roster_dispatch = use_roster_dispatcher(roster);
    use_hook(|| {
        *handles.topic.borrow_mut() = Some(state);
        *handles.topic_dispatch.borrow_mut() = Some(dispatch);
        *handles.roster.borrow_mut() = Some(roster);
        *handles.roster_dispatch.borrow_mut() = Some(roster_dispatch);
    });

    match topic {
        TopicId::BasicConcepts => rsx! { BasicConceptsBody { state, dispatch } },
        TopicId::OopConcepts => rsx! { OopConceptsBody { state, dispatch } },
        TopicId::LibrariesModules => rsx! { LibrariesModulesBody { state, dispatch } },
        TopicId::WindowsForms => rsx! { WindowsFormsBody { state, dispatch } },
        TopicId::FunctionsProcedures => rsx! { FunctionsProceduresBody { state, dispatch } },
        TopicId::Debugging => rsx! { DebuggingBody { state, dispatch } },
        TopicId::DatabaseProgramming => {
            rsx! { DatabaseProgrammingBody { state, dispatch, roster, roster_dispatch } }
        }
        TopicId::ControlStructures | TopicId::Projects | TopicId::PracticeExercises => {
            rsx! { TopicDialog { topic, is_open: true, on_close: move |_| {} } }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn handles(&self) -> &HarnessHandles {
        &self.handles
    }

    /// Run `f` inside the dom's runtime, then flush the resulting renders.
    pub fn act(&mut self, f: impl FnOnce()) {
        self.dom.in_runtime(f);
        drive_dom(&mut self.dom);
    }

    /// Read state inside the dom's runtime.
    pub fn inspect<O>(&self, f: impl FnOnce() -> O) -> O {
        self.dom.in_runtime(f)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_launch(view, ModalPolicy::default(), None)
}

pub fn setup_view_harness_with_launch(
    view: ViewKind,
    modal_policy: ModalPolicy,
    open_on_launch: Option<TopicId>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: AppServices::new(fixed_clock()),
        modal_policy,
        open_on_launch,
    });
    let handles = HarnessHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}

/// Render a view once and return its HTML.
pub fn render_view(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

/// Build a driven view and render it once.
pub fn driven_view(view: ViewKind) -> ViewHarness {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness
}
