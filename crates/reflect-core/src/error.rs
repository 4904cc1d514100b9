//! Error types for the question bank, answer store, and navigation.
//!
//! Store errors are fatal to the caller; jump errors are shown to the user
//! and the session carries on at the same question.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when building or indexing a question bank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    /// A bank needs at least one question.
    #[error("question bank is empty")]
    Empty,

    /// The requested index is not in `[0, len)`.
    #[error("question index {index} out of range (bank has {len} questions)")]
    OutOfRange { index: usize, len: usize },
}

/// Errors raised by an [`AnswerStore`](crate::store::AnswerStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The answers file exists but could not be read.
    #[error("failed to read answers file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The answers file is not a JSON object of strings. Repair or delete it.
    #[error("answers file {} is malformed (expected a JSON object of strings)", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the answers failed.
    #[error("failed to serialize answers")]
    Serialize(#[source] serde_json::Error),

    /// Writing the answers file failed.
    #[error("failed to write answers file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A rejected `jump` command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JumpError {
    /// Missing or non-numeric argument.
    #[error("Usage: jump N (e.g., jump 5)")]
    Usage,

    /// The number does not name a question.
    #[error("Invalid question number. Use 1-{total}")]
    OutOfRange { requested: i64, total: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_error_messages() {
        assert_eq!(JumpError::Usage.to_string(), "Usage: jump N (e.g., jump 5)");
        assert_eq!(
            JumpError::OutOfRange {
                requested: 999,
                total: 24
            }
            .to_string(),
            "Invalid question number. Use 1-24"
        );
    }

    #[test]
    fn malformed_error_names_file() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::Malformed {
            path: PathBuf::from("my-answers.json"),
            source,
        };
        assert!(err.to_string().contains("my-answers.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
