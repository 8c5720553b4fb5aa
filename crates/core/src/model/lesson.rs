//! Static lesson records.
//!
//! Every topic store is authored as `&'static` data and only ever read by
//! index. Optional fields that are `None` are simply not rendered.

/// One titled block of lesson content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonSection {
    pub title: &'static str,
    /// Prose, authored as light Markdown.
    pub content: &'static str,
    pub list: Option<&'static [&'static str]>,
    pub code: Option<&'static str>,
    pub image_path: Option<&'static str>,
    pub description: Option<&'static str>,
    pub steps: Option<&'static [&'static str]>,
    pub examples: Option<&'static [&'static str]>,
}

impl LessonSection {
    #[must_use]
    pub const fn new(title: &'static str, content: &'static str) -> Self {
        Self {
            title,
            content,
            list: None,
            code: None,
            image_path: None,
            description: None,
            steps: None,
            examples: None,
        }
    }

    #[must_use]
    pub const fn with_list(self, list: &'static [&'static str]) -> Self {
        Self {
            list: Some(list),
            ..self
        }
    }

    #[must_use]
    pub const fn with_code(self, code: &'static str) -> Self {
        Self {
            code: Some(code),
            ..self
        }
    }

    #[must_use]
    pub const fn with_image(self, image_path: &'static str) -> Self {
        Self {
            image_path: Some(image_path),
            ..self
        }
    }

    #[must_use]
    pub const fn with_description(self, description: &'static str) -> Self {
        Self {
            description: Some(description),
            ..self
        }
    }

    #[must_use]
    pub const fn with_steps(self, steps: &'static [&'static str]) -> Self {
        Self {
            steps: Some(steps),
            ..self
        }
    }

    #[must_use]
    pub const fn with_examples(self, examples: &'static [&'static str]) -> Self {
        Self {
            examples: Some(examples),
            ..self
        }
    }
}

/// A numbered lesson. Navigation order is the order of the owning slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub title: &'static str,
    pub sections: &'static [LessonSection],
}

/// A named tab of sections inside a topic (e.g. "Breakpoints").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicTab {
    pub key: &'static str,
    pub label: &'static str,
    pub heading: &'static str,
    pub sections: &'static [LessonSection],
}
