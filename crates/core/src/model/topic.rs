use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("unknown topic: {0}")]
    Unknown(String),
}

/// Which half of the category menu a topic button sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuColumn {
    Left,
    Right,
}

/// Every category offered by the hub, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TopicId {
    BasicConcepts,
    ControlStructures,
    FunctionsProcedures,
    OopConcepts,
    LibrariesModules,
    WindowsForms,
    DatabaseProgramming,
    Debugging,
    Projects,
    PracticeExercises,
}

impl TopicId {
    pub const ALL: [TopicId; 10] = [
        TopicId::BasicConcepts,
        TopicId::ControlStructures,
        TopicId::FunctionsProcedures,
        TopicId::OopConcepts,
        TopicId::LibrariesModules,
        TopicId::WindowsForms,
        TopicId::DatabaseProgramming,
        TopicId::Debugging,
        TopicId::Projects,
        TopicId::PracticeExercises,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            TopicId::BasicConcepts => "basic-concepts",
            TopicId::ControlStructures => "control-structures",
            TopicId::FunctionsProcedures => "functions-procedures",
            TopicId::OopConcepts => "oop-concepts",
            TopicId::LibrariesModules => "libraries-modules",
            TopicId::WindowsForms => "windows-forms",
            TopicId::DatabaseProgramming => "database-programming",
            TopicId::Debugging => "debugging",
            TopicId::Projects => "projects",
            TopicId::PracticeExercises => "practice-exercises",
        }
    }

    /// Label shown on the category button.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            TopicId::BasicConcepts => "Basic Concepts",
            TopicId::ControlStructures => "Control Structures",
            TopicId::FunctionsProcedures => "Functions & Procedures",
            TopicId::OopConcepts => "OOP Concepts",
            TopicId::LibrariesModules => "Libraries & Modules",
            TopicId::WindowsForms => "Windows Forms",
            TopicId::DatabaseProgramming => "Database Programming",
            TopicId::Debugging => "Debugging",
            TopicId::Projects => "Projects",
            TopicId::PracticeExercises => "Practice Exercises",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            TopicId::BasicConcepts => "📝",
            TopicId::ControlStructures => "🔄",
            TopicId::FunctionsProcedures => "🎯",
            TopicId::OopConcepts => "🧰",
            TopicId::LibrariesModules => "📚",
            TopicId::WindowsForms => "🖥️",
            TopicId::DatabaseProgramming => "🗃️",
            TopicId::Debugging => "🔍",
            TopicId::Projects => "🛠️",
            TopicId::PracticeExercises => "🎮",
        }
    }

    /// CSS modifier used for the button colour.
    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            TopicId::BasicConcepts => "green",
            TopicId::ControlStructures => "yellow",
            TopicId::FunctionsProcedures => "red",
            TopicId::OopConcepts => "purple",
            TopicId::LibrariesModules => "blue",
            TopicId::WindowsForms => "indigo",
            TopicId::DatabaseProgramming => "pink",
            TopicId::Debugging => "orange",
            TopicId::Projects => "teal",
            TopicId::PracticeExercises => "cyan",
        }
    }

    #[must_use]
    pub fn column(self) -> MenuColumn {
        match self {
            TopicId::BasicConcepts
            | TopicId::ControlStructures
            | TopicId::FunctionsProcedures
            | TopicId::OopConcepts
            | TopicId::LibrariesModules => MenuColumn::Left,
            _ => MenuColumn::Right,
        }
    }

    /// Whether the topic has a modal behind its button.
    #[must_use]
    pub fn has_content(self) -> bool {
        !matches!(self, TopicId::Projects | TopicId::PracticeExercises)
    }

    pub fn in_column(column: MenuColumn) -> impl Iterator<Item = TopicId> {
        Self::ALL.into_iter().filter(move |topic| topic.column() == column)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for TopicId {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|topic| topic.slug() == wanted)
            .ok_or_else(|| TopicError::Unknown(s.to_string()))
    }
}
