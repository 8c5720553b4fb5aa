//! Shared error types for the services crate.

use thiserror::Error;

use hub_core::model::StudentError;

/// Errors emitted by `RosterService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RosterServiceError {
    #[error(transparent)]
    Student(#[from] StudentError),
    #[error("Error in SQL query syntax")]
    QuerySyntax(#[from] serde_json::Error),
}
