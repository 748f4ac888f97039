//! Hook entry types, the callback signature, and arity adapters.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HookError;
use crate::result::HookResult;

/// Priority assigned when a callback is registered without one.
///
/// Lower priorities run earlier during dispatch.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Number of leading positional values passed to a callback registered
/// without a declared argument count.
pub const DEFAULT_ACCEPTED_ARGS: usize = 1;

/// Signature every registered callback is invoked through.
///
/// The dispatcher builds the buffer `[current, extra...]`, slices it down to
/// the entry's declared `accepted_args`, and passes the result here. The
/// callback returns the new running value, or an error that aborts the fold.
pub type HookCallback = Arc<dyn Fn(&[Value]) -> HookResult<Value> + Send + Sync>;

/// One registered callback bound to a hook.
///
/// Entries are immutable once created and cheap to clone; the registry hands
/// out cloned snapshots so callbacks never run under its lock.
#[derive(Clone)]
pub struct HookEntry {
    /// Hook this entry is bound to. Stored redundantly for introspection;
    /// the registry also keys entries by this name.
    pub hook_name: String,
    /// The callback.
    pub callback: HookCallback,
    /// Number of leading positional values the dispatcher passes. Trusted
    /// as declared; never checked against the callback's real arity.
    pub accepted_args: usize,
}

impl fmt::Debug for HookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookEntry")
            .field("hook_name", &self.hook_name)
            .field("accepted_args", &self.accepted_args)
            .finish_non_exhaustive()
    }
}

/// Serializable descriptor of a registered entry, for debugging surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookEntryInfo {
    /// Hook the entry is bound to.
    pub hook_name: String,
    /// Priority the entry was registered at.
    pub priority: i32,
    /// Declared argument count.
    pub accepted_args: usize,
}

/// Wraps a single-argument closure into the variadic callback form.
///
/// The wrapped closure is invoked with the first value of the argument
/// buffer; a buffer of any other length fails with an arity error. The
/// failure surfaces at dispatch time, from the call itself; registration
/// never validates arity.
pub fn unary<F>(f: F) -> HookCallback
where
    F: Fn(Value) -> HookResult<Value> + Send + Sync + 'static,
{
    Arc::new(move |args: &[Value]| match args {
        [value] => f(value.clone()),
        _ => Err(HookError::arity_mismatch(1, args.len())),
    })
}

/// Wraps a two-argument closure into the variadic callback form.
pub fn binary<F>(f: F) -> HookCallback
where
    F: Fn(Value, Value) -> HookResult<Value> + Send + Sync + 'static,
{
    Arc::new(move |args: &[Value]| match args {
        [a, b] => f(a.clone(), b.clone()),
        _ => Err(HookError::arity_mismatch(2, args.len())),
    })
}

/// Wraps a three-argument closure into the variadic callback form.
pub fn ternary<F>(f: F) -> HookCallback
where
    F: Fn(Value, Value, Value) -> HookResult<Value> + Send + Sync + 'static,
{
    Arc::new(move |args: &[Value]| match args {
        [a, b, c] => f(a.clone(), b.clone(), c.clone()),
        _ => Err(HookError::arity_mismatch(3, args.len())),
    })
}
