//! Unified error type for hook callbacks.
//!
//! Callbacks map their internal failures into [`HookError`] so the dispatch
//! fold can propagate them through the ? operator. The registry itself never
//! constructs or translates errors during dispatch: whatever a callback
//! returns reaches the dispatch caller unmodified.

use std::fmt;

use thiserror::Error;

/// Top-level error kind categorization for hook failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HookErrorKind {
    /// A callback was invoked with a different number of values than its
    /// signature requires.
    ArityMismatch,
    /// The callback's own logic failed.
    Execution,
    /// A serialization/deserialization error occurred inside a callback.
    Serialization,
}

impl fmt::Display for HookErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch => write!(f, "ARITY_MISMATCH"),
            Self::Execution => write!(f, "EXECUTION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// The error produced by hook callbacks and surfaced by dispatch.
///
/// The first `Err` returned by any callback aborts the remainder of that
/// dispatch's fold; no later callback runs and no default value is
/// substituted.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct HookError {
    /// The category of error.
    pub kind: HookErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl HookError {
    /// Create a new hook error.
    pub fn new(kind: HookErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new hook error with an underlying cause.
    pub fn with_source(
        kind: HookErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an arity-mismatch error.
    pub fn arity_mismatch(expected: usize, available: usize) -> Self {
        Self::new(
            HookErrorKind::ArityMismatch,
            format!("callback expected {expected} arguments, got {available}"),
        )
    }

    /// Create an execution error.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(HookErrorKind::Execution, message)
    }
}

impl From<serde_json::Error> for HookError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            HookErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}
