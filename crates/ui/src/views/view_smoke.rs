use hub_core::content::windows_forms::TUTORIALS;
use hub_core::content::{basic_concepts, libraries_modules, oop_concepts};
use hub_core::model::{LessonSection, ModalPolicy, TopicId};

use super::test_harness::{ViewKind, render_view, setup_view_harness_with_launch};

/// Every section title renders, and each optional block shows up exactly
/// when some section carries that field.
fn assert_sections_render(html: &str, sections: &[LessonSection]) {
    assert_eq!(html.matches("lesson-section-title").count(), sections.len(), "{html}");
    for section in sections {
        // Titles with markup characters come back entity-escaped.
        if !section.title.contains(['&', '<', '>', '"', '\'']) {
            assert!(html.contains(section.title), "missing {:?}: {html}", section.title);
        }
    }

    let has = |present: fn(&LessonSection) -> bool| sections.iter().any(present);
    let expected = [
        ("<img", has(|s| s.image_path.is_some())),
        ("lesson-steps", has(|s| s.steps.is_some_and(|steps| !steps.is_empty()))),
        ("lesson-examples", has(|s| s.examples.is_some_and(|examples| !examples.is_empty()))),
        ("code-block", has(|s| s.code.is_some())),
        ("lesson-description", has(|s| s.description.is_some())),
        ("lesson-list", has(|s| s.list.is_some_and(|items| !items.is_empty()))),
    ];
    for (marker, present) in expected {
        assert_eq!(html.contains(marker), present, "{marker}: {html}");
    }
}

#[test]
fn hub_view_smoke_renders_menu_without_modals() {
    let html = render_view(ViewKind::Hub);

    assert_eq!(html.matches("category-button").count(), 10, "{html}");
    assert_eq!(html.matches("Coming soon").count(), 2, "{html}");
    assert!(html.contains("Basic Concepts"), "{html}");
    assert!(html.contains("Practice Exercises"), "{html}");
    assert!(!html.contains("modal-overlay"), "{html}");
}

#[test]
fn hub_view_smoke_opens_launch_topic_once() {
    let mut harness =
        setup_view_harness_with_launch(ViewKind::Hub, ModalPolicy::Exclusive, Some(TopicId::Debugging));
    harness.rebuild();
    let html = harness.render();

    assert_eq!(html.matches("modal-overlay").count(), 1, "{html}");
    assert!(html.contains("Debugging in VB.NET"), "{html}");
    assert!(html.contains("Debugging Fundamentals"), "{html}");
}

#[test]
fn hub_view_smoke_ignores_placeholder_launch_topic() {
    let mut harness =
        setup_view_harness_with_launch(ViewKind::Hub, ModalPolicy::Permissive, Some(TopicId::Projects));
    harness.rebuild();
    let html = harness.render();

    assert!(!html.contains("modal-overlay"), "{html}");
}

#[test]
fn basic_concepts_smoke_renders_first_lesson_and_overview() {
    let html = render_view(ViewKind::Topic(TopicId::BasicConcepts));

    assert!(html.contains("VB.NET: Basic Concepts"), "{html}");
    assert!(html.contains("Introduction to Visual Basic 2019"), "{html}");
    assert!(html.contains("/assets/vbnet-images/vs2019-ide.png"), "{html}");
    assert!(html.contains("lesson-overview"), "{html}");
}

#[test]
fn lesson_panel_smoke_renders_only_present_fields() {
    let html = render_view(ViewKind::Lesson(basic_concepts::LESSONS, 0));

    assert!(html.contains("lesson-panel"), "{html}");
    assert!(html.contains("<img"), "{html}");
    assert!(!html.contains("lesson-steps"), "{html}");
    assert!(!html.contains("lesson-examples"), "{html}");
}

#[test]
fn lesson_panel_smoke_out_of_range_renders_nothing() {
    let html = render_view(ViewKind::Lesson(basic_concepts::LESSONS, basic_concepts::LESSONS.len()));
    assert!(!html.contains("lesson-panel"), "{html}");
    assert!(!html.contains("<section"), "{html}");
}

#[test]
fn section_panel_smoke_renders_steps_and_examples() {
    let html = render_view(ViewKind::Section(libraries_modules::SECTIONS, 3));

    assert!(html.contains("NuGet Package Management"), "{html}");
    assert!(html.contains("lesson-steps"), "{html}");
    assert!(html.contains("Install-Package MySql.Data"), "{html}");
    assert!(!html.contains("<img"), "{html}");

    let missing = render_view(ViewKind::Section(libraries_modules::SECTIONS, usize::MAX));
    assert!(!missing.contains("lesson-panel"), "{missing}");
}

#[test]
fn video_panel_smoke_embeds_selected_tutorial() {
    let html = render_view(ViewKind::Video(1));
    assert!(html.contains("https://www.youtube.com/embed/CkpUQYzYCC8"), "{html}");
    assert!(html.contains("Creating Your First Form"), "{html}");

    let missing = render_view(ViewKind::Video(TUTORIALS.len()));
    assert!(!missing.contains("iframe"), "{missing}");
}

#[test]
fn windows_forms_smoke_lists_every_tutorial() {
    let html = render_view(ViewKind::Topic(TopicId::WindowsForms));
    assert_eq!(html.matches("video-entry-title").count(), 3, "{html}");
    assert!(html.contains("<iframe"), "{html}");
}

#[test]
fn control_structures_smoke_renders_default_if_demo() {
    let html = render_view(ViewKind::Topic(TopicId::ControlStructures));

    assert!(html.contains("Output: Adult"), "{html}");
    assert!(html.contains("Age 20 is classified as an Adult (18 or older)"), "{html}");
    assert!(html.contains("Initialize variables before using them in conditions"), "{html}");
}

#[test]
fn functions_procedures_smoke_starts_on_learn_basics() {
    let html = render_view(ViewKind::Topic(TopicId::FunctionsProcedures));

    assert!(html.contains("Method Components"), "{html}");
    assert!(html.contains("Advanced Topics"), "{html}");
    assert!(!html.contains("Run Code"), "{html}");
}

#[test]
fn database_smoke_starts_on_learn_sections() {
    let html = render_view(ViewKind::Topic(TopicId::DatabaseProgramming));

    assert!(html.contains("Database Connection"), "{html}");
    assert!(html.contains("Basic CRUD Operations"), "{html}");
    assert!(!html.contains("student-table"), "{html}");
}

#[test]
fn oop_and_libraries_smoke_render_first_entry() {
    let oop = render_view(ViewKind::Topic(TopicId::OopConcepts));
    assert!(oop.contains("Understanding Classes"), "{oop}");
    assert!(!oop.contains("Abstract Class Usage"), "{oop}");

    let libraries = render_view(ViewKind::Topic(TopicId::LibrariesModules));
    assert!(libraries.contains("Built-in Libraries"), "{libraries}");
    assert!(libraries.contains("System.Windows.Forms: GUI development"), "{libraries}");
}

#[test]
fn lesson_panel_smoke_sweeps_every_lesson() {
    for lessons in [basic_concepts::LESSONS, oop_concepts::LESSONS] {
        for (index, lesson) in lessons.iter().enumerate() {
            let html = render_view(ViewKind::Lesson(lessons, index));
            assert!(html.contains("lesson-panel"), "lesson {}: {html}", lesson.title);
            assert_sections_render(&html, lesson.sections);
        }
    }
    assert_eq!(basic_concepts::LESSONS.len(), 10);
    assert_eq!(oop_concepts::LESSONS.len(), 6);
}

#[test]
fn section_panel_smoke_sweeps_every_library_section() {
    let sections = libraries_modules::SECTIONS;
    assert_eq!(sections.len(), 5);
    for index in 0..sections.len() {
        let html = render_view(ViewKind::Section(sections, index));
        assert_sections_render(&html, &sections[index..=index]);
    }
}

#[test]
fn video_panel_smoke_sweeps_every_tutorial() {
    assert_eq!(TUTORIALS.len(), 3);
    for (index, video) in TUTORIALS.iter().enumerate() {
        let html = render_view(ViewKind::Video(index));
        assert!(html.contains(video.url), "{html}");
        assert!(html.contains(video.title), "{html}");
        assert!(!html.contains("video-unavailable"), "{html}");
    }
}
