use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_STUDENT_AGE: u8 = 18;
const MAX_STUDENT_AGE: u8 = 120;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudentError {
    #[error("student name cannot be empty")]
    EmptyName,
    #[error("course cannot be empty")]
    EmptyCourse,
    #[error("age must be between 1 and 120")]
    AgeOutOfRange,
}

/// A row of the practice `Students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub course: String,
}

/// Unvalidated form input for a new student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub age: u8,
    pub course: String,
}

impl StudentDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u8, course: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            course: course.into(),
        }
    }

    /// Validate the draft into a student with the given id.
    ///
    /// # Errors
    ///
    /// Returns `StudentError` when the name or course is blank or the age is
    /// outside `1..=120`.
    pub fn validate(self, id: u32) -> Result<Student, StudentError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StudentError::EmptyName);
        }
        let course = self.course.trim();
        if course.is_empty() {
            return Err(StudentError::EmptyCourse);
        }
        if self.age == 0 || self.age > MAX_STUDENT_AGE {
            return Err(StudentError::AgeOutOfRange);
        }
        Ok(Student {
            id,
            name: name.to_string(),
            age: self.age,
            course: course.to_string(),
        })
    }
}

/// The in-memory student table used by the database practice area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    #[must_use]
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// The two rows the practice table starts with.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            Student {
                id: 1,
                name: "John Doe".to_string(),
                age: 20,
                course: "Computer Science".to_string(),
            },
            Student {
                id: 2,
                name: "Jane Smith".to_string(),
                age: 22,
                course: "Information Technology".to_string(),
            },
        ])
    }

    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The id the next added student will receive.
    #[must_use]
    pub fn next_id(&self) -> u32 {
        u32::try_from(self.students.len()).map_or(u32::MAX, |len| len.saturating_add(1))
    }

    /// Validate and append a student. The roster is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `StudentError` if the draft fails validation.
    pub fn add(&mut self, draft: StudentDraft) -> Result<&Student, StudentError> {
        let student = draft.validate(self.next_id())?;
        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }
}
