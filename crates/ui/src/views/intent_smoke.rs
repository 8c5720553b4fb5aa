use dioxus::prelude::*;
use hub_core::content::basic_concepts::LESSONS;
use hub_core::content::windows_forms::TUTORIALS;
use hub_core::evaluator::RuleSet;
use hub_core::model::{ModalPolicy, TopicId};

use super::modal::LearnMode;
use super::state::{RosterIntent, ShellIntent, TopicIntent};
use super::test_harness::{ViewKind, driven_view, setup_view_harness_with_launch};

#[test]
fn hub_intent_smoke_opens_and_closes_modals() {
    let mut harness = driven_view(ViewKind::DrivenHub);
    let dispatch = harness.handles().shell_dispatch();
    let shell = harness.handles().shell();
    assert!(!harness.render().contains("modal-overlay"));

    harness.act(move || dispatch.call(ShellIntent::Open(TopicId::BasicConcepts)));
    let html = harness.render();
    assert_eq!(html.matches("modal-overlay").count(), 1, "{html}");
    assert!(html.contains("VB.NET: Basic Concepts"), "{html}");

    harness.act(move || dispatch.call(ShellIntent::Open(TopicId::Debugging)));
    let html = harness.render();
    assert_eq!(html.matches("modal-overlay").count(), 1, "{html}");
    assert!(html.contains("Debugging in VB.NET"), "{html}");
    assert!(!html.contains("VB.NET: Basic Concepts"), "{html}");

    harness.act(move || dispatch.call(ShellIntent::Close(TopicId::Debugging)));
    let html = harness.render();
    assert!(!html.contains("modal-overlay"), "{html}");
    assert!(!harness.inspect(move || shell.peek().is_open(TopicId::Debugging)));
}

#[test]
fn hub_intent_smoke_stacks_modals_when_permissive() {
    let mut harness =
        setup_view_harness_with_launch(ViewKind::DrivenHub, ModalPolicy::Permissive, None);
    harness.rebuild();
    let dispatch = harness.handles().shell_dispatch();

    harness.act(move || {
        dispatch.call(ShellIntent::Open(TopicId::OopConcepts));
        dispatch.call(ShellIntent::Open(TopicId::WindowsForms));
        dispatch.call(ShellIntent::Open(TopicId::Projects));
    });
    let html = harness.render();
    assert_eq!(html.matches("modal-overlay").count(), 2, "{html}");

    harness.act(move || dispatch.call(ShellIntent::Close(TopicId::OopConcepts)));
    let html = harness.render();
    assert_eq!(html.matches("modal-overlay").count(), 1, "{html}");
    assert!(html.contains("Windows Forms Tutorials"), "{html}");
}

#[test]
fn basic_concepts_intent_smoke_selects_lesson() {
    let mut harness = driven_view(ViewKind::DrivenTopic(TopicId::BasicConcepts));
    let dispatch = harness.handles().topic_dispatch();
    let picked = &LESSONS[4];

    harness.act(move || dispatch.call(TopicIntent::Select(4)));
    let html = harness.render();
    for section in picked.sections {
        assert!(html.contains(section.title), "missing {:?}: {html}", section.title);
    }
    assert!(html.contains("/assets/vbnet-images/for-loop.png"), "{html}");
    assert!(!html.contains("/assets/vbnet-images/vs2019-ide.png"), "{html}");

    harness.act(move || dispatch.call(TopicIntent::Select(42)));
    let html = harness.render();
    assert!(!html.contains("lesson-panel"), "{html}");
    assert!(html.contains("lesson-overview"), "{html}");
}

#[test]
fn functions_intent_smoke_runs_practice_newest_first() {
    let mut harness = driven_view(ViewKind::DrivenTopic(TopicId::FunctionsProcedures));
    let dispatch = harness.handles().topic_dispatch();
    let state = harness.handles().topic();
    assert!(!harness.render().contains("Run Code"));

    harness.act(move || dispatch.call(TopicIntent::SwitchMode(LearnMode::Practice)));
    let html = harness.render();
    assert!(html.contains("Run Code"), "{html}");
    assert!(html.contains("Example template based on basics"), "{html}");
    assert!(!html.contains("practice-results"), "{html}");

    harness.act(move || dispatch.call(TopicIntent::Select(2)));
    let html = harness.render();
    assert!(html.contains("Example template based on procedures"), "{html}");

    for _ in 0..5 {
        harness.act(move || dispatch.call(TopicIntent::Run(RuleSet::Procedures)));
    }
    let mut code = state.code;
    harness.act(move || {
        code.set("Sub Greet()\n    Console.WriteLine(\"Hi\")\nEnd Sub".to_string());
        dispatch.call(TopicIntent::Run(RuleSet::Procedures));
    });

    let html = harness.render();
    assert_eq!(html.matches("practice-result ").count(), 5, "{html}");
    assert_eq!(html.matches("practice-result failure").count(), 4, "{html}");
    assert_eq!(html.matches("practice-result success").count(), 1, "{html}");
    let success = html.find("practice-result success").unwrap();
    let failure = html.find("practice-result failure").unwrap();
    assert!(success < failure, "{html}");
    assert!(html.contains("Code Analysis Results"), "{html}");
    assert_eq!(harness.inspect(move || state.history.peek().len()), 5);
}

#[test]
fn database_intent_smoke_adds_students_and_queries() {
    let mut harness = driven_view(ViewKind::DrivenTopic(TopicId::DatabaseProgramming));
    let dispatch = harness.handles().topic_dispatch();
    let roster_dispatch = harness.handles().roster_dispatch();
    let roster = harness.handles().roster();

    harness.act(move || dispatch.call(TopicIntent::SwitchMode(LearnMode::Practice)));
    let html = harness.render();
    assert!(html.contains("student-table"), "{html}");
    assert!(html.contains("John Doe"), "{html}");
    assert!(html.contains("Add Student"), "{html}");
    assert!(html.contains("Execute Query"), "{html}");
    assert!(html.contains("Check Your ADO.NET Code"), "{html}");
    assert!(!html.contains("form-error"), "{html}");

    let mut name = roster.name;
    harness.act(move || {
        name.set("Ada Lovelace".to_string());
        roster_dispatch.call(RosterIntent::AddStudent);
    });
    let html = harness.render();
    assert!(html.contains("form-error"), "{html}");
    assert!(html.contains("course cannot be empty"), "{html}");
    assert_eq!(harness.inspect(move || roster.roster.peek().students().len()), 2);

    let mut course = roster.course;
    harness.act(move || {
        course.set("Mathematics".to_string());
        roster_dispatch.call(RosterIntent::AddStudent);
    });
    let html = harness.render();
    assert!(html.contains("Ada Lovelace"), "{html}");
    assert!(!html.contains("form-error"), "{html}");
    assert_eq!(harness.inspect(move || roster.name.peek().clone()), "");

    let mut query = roster.query;
    harness.act(move || {
        query.set("SELECT * FROM Students".to_string());
        roster_dispatch.call(RosterIntent::RunQuery);
    });
    let html = harness.render();
    assert!(html.contains("query-result"), "{html}");
    let reply = harness.inspect(move || roster.reply.peek().clone());
    assert!(reply.contains("\"Ada Lovelace\""), "{reply}");
}

#[test]
fn windows_forms_intent_smoke_switches_video() {
    let mut harness = driven_view(ViewKind::DrivenTopic(TopicId::WindowsForms));
    let dispatch = harness.handles().topic_dispatch();
    assert!(harness.render().contains(TUTORIALS[0].title));

    harness.act(move || dispatch.call(TopicIntent::Select(2)));
    let html = harness.render();
    assert!(html.contains(TUTORIALS[2].url), "{html}");
    assert!(html.contains("video-title"), "{html}");
}
