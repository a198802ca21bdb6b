//! Error types for gallery workflows.

use thiserror::Error;

use crate::task::WorkflowStep;

/// Failure reported by a [`crate::PhotoService`] workflow.
///
/// Host adapters report plain strings; each workflow step wraps them in the variant naming where
/// the workflow stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// The camera was unavailable, denied, or dismissed. Nothing was stored.
    #[error("camera capture failed: {0}")]
    Capture(String),

    /// The captured image could not be fetched or read. Nothing was stored.
    #[error("failed to encode captured image: {0}")]
    Encode(String),

    /// The encoded image could not be written. The index was not changed.
    #[error("failed to write photo '{filepath}': {reason}")]
    Write {
        /// Generated file name.
        filepath: String,
        /// Host-reported cause.
        reason: String,
    },

    /// The written file's URI could not be resolved. The index was not changed.
    #[error("failed to resolve display path for '{filepath}': {reason}")]
    DisplayPath {
        /// Generated file name.
        filepath: String,
        /// Host-reported cause.
        reason: String,
    },

    /// The index could not be persisted. The in-memory index is ahead of storage.
    #[error("failed to persist photo index: {0}")]
    Flush(String),

    /// The persisted index could not be read. The previous in-memory index is kept.
    #[error("failed to read photo index: {0}")]
    Load(String),

    /// The workflow observed a cancellation before `step`.
    #[error("workflow cancelled before {step}")]
    Cancelled {
        /// Step that did not run.
        step: WorkflowStep,
    },

    /// Configuration failed validation.
    #[error("invalid gallery configuration: {0}")]
    Config(String),
}

impl PhotoError {
    /// Returns `true` when the in-memory index already contains the photo being reported.
    pub fn index_mutated(&self) -> bool {
        matches!(self, Self::Flush(_))
    }
}

/// Result alias for gallery workflows.
pub type PhotoResult<T> = Result<T, PhotoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_step() {
        let err = PhotoError::Write {
            filepath: "1000.jpeg".to_string(),
            reason: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "failed to write photo '1000.jpeg': disk full");

        let err = PhotoError::Cancelled {
            step: WorkflowStep::Write,
        };
        assert_eq!(err.to_string(), "workflow cancelled before write");
    }

    #[test]
    fn only_flush_failures_leave_index_mutated() {
        assert!(PhotoError::Flush("quota".to_string()).index_mutated());
        assert!(!PhotoError::Capture("denied".to_string()).index_mutated());
        assert!(!PhotoError::Encode("revoked".to_string()).index_mutated());
        assert!(!PhotoError::Load("storage unavailable".to_string()).index_mutated());
    }
}
