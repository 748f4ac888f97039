//! Prelude for convenient imports.

pub use serde_json::{Value, json};

pub use crate::definitions::{
    DEFAULT_ACCEPTED_ARGS, DEFAULT_PRIORITY, HookCallback, HookEntry, HookEntryInfo, binary,
    ternary, unary,
};
pub use crate::error::{HookError, HookErrorKind};
pub use crate::global::{default_registry, dispatch_hook, register_hook_with, reset_hooks};
// Imports both the `register_hook` function and the `register_hook!` macro.
pub use crate::register_hook;
pub use crate::registry::HookRegistry;
pub use crate::result::HookResult;
