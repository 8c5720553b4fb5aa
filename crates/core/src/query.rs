//! Keyword-level recognition of the practice SQL statements.
//!
//! Nothing is parsed or executed; the statement is classified by the phrases
//! it contains, matching case-insensitively.

pub const INSERT_ACK: &str = "Query executed successfully! Check the table for results.";
pub const WRONG_TABLE_HINT: &str =
    "Only the Students table is available. Try: SELECT * FROM Students";
pub const SUPPORTED_QUERIES_HINT: &str =
    "Supported queries: SELECT * FROM Students, INSERT INTO Students ...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    SelectStudents,
    SelectOther,
    InsertStudents,
    Unsupported,
}

impl QueryKind {
    #[must_use]
    pub fn classify(query: &str) -> Self {
        let query = query.trim().to_lowercase();
        if query.contains("select") {
            if query.contains("from students") {
                QueryKind::SelectStudents
            } else {
                QueryKind::SelectOther
            }
        } else if query.contains("insert into students") {
            QueryKind::InsertStudents
        } else {
            QueryKind::Unsupported
        }
    }

    /// Fixed reply for every kind that does not return rows.
    #[must_use]
    pub fn canned_reply(self) -> Option<&'static str> {
        match self {
            QueryKind::SelectStudents => None,
            QueryKind::SelectOther => Some(WRONG_TABLE_HINT),
            QueryKind::InsertStudents => Some(INSERT_ACK),
            QueryKind::Unsupported => Some(SUPPORTED_QUERIES_HINT),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::SelectStudents => "select_students",
            QueryKind::SelectOther => "select_other",
            QueryKind::InsertStudents => "insert_students",
            QueryKind::Unsupported => "unsupported",
        }
    }
}
