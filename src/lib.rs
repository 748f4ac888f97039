//! # hookline
//!
//! Named-hook callback registry. Provides:
//!
//! - Priority-ordered registration (lower priority runs first, ties in
//!   registration order)
//! - Value-folding dispatch with pass-through for hooks nobody registered
//! - Argument shaping: each callback receives `[current, extra...]` sliced
//!   to its declared `accepted_args`
//! - A process-wide default registry with a free-function surface and a
//!   [`register_hook!`] definition-site macro
//!
//! Callbacks transform a running [`serde_json::Value`]; the first callback
//! error aborts the fold and propagates to the dispatch caller.

pub mod definitions;
pub mod error;
pub mod global;
mod macros;
pub mod prelude;
pub mod registry;
pub mod result;

pub use definitions::{
    DEFAULT_ACCEPTED_ARGS, DEFAULT_PRIORITY, HookCallback, HookEntry, HookEntryInfo, binary,
    ternary, unary,
};
pub use error::{HookError, HookErrorKind};
pub use global::{default_registry, dispatch_hook, register_hook, register_hook_with, reset_hooks};
pub use registry::HookRegistry;
pub use result::HookResult;
