use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModalPolicyError {
    #[error("unknown modal policy: {0} (expected `exclusive` or `permissive`)")]
    Unknown(String),
}

/// How the shell treats opening a dialog while another one is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalPolicy {
    /// Opening a dialog closes every other dialog.
    #[default]
    Exclusive,
    /// Dialogs open independently of each other.
    Permissive,
}

impl ModalPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModalPolicy::Exclusive => "exclusive",
            ModalPolicy::Permissive => "permissive",
        }
    }
}

impl fmt::Display for ModalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalPolicy {
    type Err = ModalPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclusive" => Ok(ModalPolicy::Exclusive),
            "permissive" => Ok(ModalPolicy::Permissive),
            _ => Err(ModalPolicyError::Unknown(s.to_string())),
        }
    }
}
