//! Cooperative cancellation for gallery workflows.

use std::{cell::Cell, fmt, rc::Rc};

use crate::error::{PhotoError, PhotoResult};

/// Suspension points a workflow checks for cancellation before entering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowStep {
    /// Camera capture.
    Capture,
    /// Reading or fetching the captured bytes.
    Encode,
    /// Writing bytes to the filesystem.
    Write,
    /// Resolving the display URI of a written file.
    ResolveDisplayPath,
    /// Reading the persisted index.
    Load,
    /// Re-reading one photo's bytes during load.
    Rehydrate,
}

impl WorkflowStep {
    /// Returns a stable string token for logs and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Capture => "capture",
            Self::Encode => "encode",
            Self::Write => "write",
            Self::ResolveDisplayPath => "resolve-display-path",
            Self::Load => "load",
            Self::Rehydrate => "rehydrate",
        }
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared cancellation flag. Clones observe the same flag.
///
/// Cancellation is cooperative: an in-flight host call runs to completion and the workflow stops
/// at its next step.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Returns `true` once [`CancelToken::cancel`] was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Fails with [`PhotoError::Cancelled`] when cancelled, before entering `step`.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoError::Cancelled`] naming `step`.
    pub fn check(&self, step: WorkflowStep) -> PhotoResult<()> {
        if self.is_cancelled() {
            tracing::debug!(step = step.as_str(), "workflow cancelled");
            return Err(PhotoError::Cancelled { step });
        }
        Ok(())
    }
}
