use hub_core::model::{LessonSection, TopicTab};

use super::markdown_vm::{inline_markdown_to_html, markdown_to_html};

/// A lesson section ready to render. Absent fields stay `None`/empty and
/// produce no markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub content_html: Option<String>,
    pub list_html: Vec<String>,
    pub steps: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub code: Option<&'static str>,
    pub image_path: Option<&'static str>,
}

#[must_use]
pub fn map_section(section: &LessonSection) -> SectionVm {
    let content_html = if section.content.trim().is_empty() {
        None
    } else {
        Some(markdown_to_html(section.content))
    };

    SectionVm {
        title: section.title,
        description: section.description,
        content_html,
        list_html: section
            .list
            .unwrap_or_default()
            .iter()
            .map(|item| inline_markdown_to_html(item))
            .collect(),
        steps: section.steps.unwrap_or_default(),
        examples: section.examples.unwrap_or_default(),
        code: section.code,
        image_path: section.image_path,
    }
}

/// Tab strip labels plus the tab selected by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabsVm {
    pub labels: Vec<&'static str>,
    pub active: Option<TopicTab>,
}

impl TabsVm {
    #[must_use]
    pub fn new(tabs: &'static [TopicTab], index: usize) -> Self {
        Self {
            labels: tabs.iter().map(|tab| tab.label).collect(),
            active: tabs.get(index).copied(),
        }
    }
}
