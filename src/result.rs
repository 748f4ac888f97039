//! Convenience result type alias for hook operations.

use crate::error::HookError;

/// A specialized `Result` type for hook callbacks and dispatch.
///
/// This is defined as a convenience so that callback code does not need to
/// write `Result<Value, HookError>` explicitly.
pub type HookResult<T> = Result<T, HookError>;
