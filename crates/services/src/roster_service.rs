use hub_core::model::{Roster, Student, StudentDraft};
use hub_core::query::QueryKind;
use tracing::{info, warn};

use crate::error::RosterServiceError;

/// Student roster edits and the SQL practice console.
///
/// The roster itself is owned by the view that shows it; the service only
/// applies validated changes and answers queries against it.
#[derive(Clone, Default)]
pub struct RosterService;

impl RosterService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate a draft and append it to the roster.
    ///
    /// # Errors
    ///
    /// Returns `RosterServiceError::Student` if the draft fails validation;
    /// the roster is left unchanged.
    pub fn add_student(
        &self,
        roster: &mut Roster,
        draft: StudentDraft,
    ) -> Result<Student, RosterServiceError> {
        let student = match roster.add(draft) {
            Ok(student) => student.clone(),
            Err(err) => {
                warn!(error = %err, "student rejected");
                return Err(err.into());
            }
        };
        info!(student_id = student.id, roster_len = roster.len(), "student added");
        Ok(student)
    }

    /// Answer a practice query against the roster.
    ///
    /// # Errors
    ///
    /// Returns `RosterServiceError::QuerySyntax` if the rows cannot be serialized.
    pub fn query(&self, roster: &Roster, text: &str) -> Result<String, RosterServiceError> {
        let kind = QueryKind::classify(text);
        info!(kind = kind.as_str(), "practice query");
        match kind.canned_reply() {
            Some(reply) => Ok(reply.to_string()),
            None => Ok(serde_json::to_string_pretty(roster.students())?),
        }
    }

    /// Like [`RosterService::query`], with failures rendered as the reply text.
    #[must_use]
    pub fn run_query(&self, roster: &Roster, text: &str) -> String {
        self.query(roster, text)
            .unwrap_or_else(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::model::StudentError;
    use hub_core::query::{INSERT_ACK, SUPPORTED_QUERIES_HINT, WRONG_TABLE_HINT};

    #[test]
    fn add_student_assigns_next_id() {
        let service = RosterService::new();
        let mut roster = Roster::seeded();

        let student = service
            .add_student(&mut roster, StudentDraft::new("  Ada Lovelace ", 36, "Mathematics"))
            .unwrap();

        assert_eq!(student.id, 3);
        assert_eq!(student.name, "Ada Lovelace");
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn rejected_draft_leaves_roster_untouched() {
        let service = RosterService::new();
        let mut roster = Roster::seeded();

        let err = service
            .add_student(&mut roster, StudentDraft::new("Ada", 30, "   "))
            .unwrap_err();

        assert!(matches!(err, RosterServiceError::Student(StudentError::EmptyCourse)));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn select_returns_rows_as_json() {
        let service = RosterService::new();
        let roster = Roster::seeded();

        let reply = service.run_query(&roster, "  SELECT * FROM Students ");
        let rows: serde_json::Value = serde_json::from_str(&reply).unwrap();

        assert_eq!(rows.as_array().map(Vec::len), Some(2));
        assert_eq!(rows[0]["name"], "John Doe");
        assert_eq!(rows[1]["course"], "Information Technology");
    }

    #[test]
    fn non_row_queries_get_canned_replies() {
        let service = RosterService::new();
        let roster = Roster::seeded();

        assert_eq!(service.run_query(&roster, "select * from teachers"), WRONG_TABLE_HINT);
        assert_eq!(
            service.run_query(&roster, "INSERT INTO Students VALUES (3, 'Ann', 19, 'Art')"),
            INSERT_ACK
        );
        assert_eq!(service.run_query(&roster, "DROP TABLE Students"), SUPPORTED_QUERIES_HINT);
        assert_eq!(roster.len(), 2);
    }
}
