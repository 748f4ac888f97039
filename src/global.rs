//! Process-wide default registry and the free-function surface over it.
//!
//! Independent modules extend each other's behavior through this shared
//! registry without direct coupling: one module dispatches a named hook, any
//! other module may have registered callbacks for it.

use std::sync::LazyLock;

use serde_json::Value;

use crate::definitions::HookCallback;
use crate::registry::HookRegistry;
use crate::result::HookResult;

static DEFAULT_REGISTRY: LazyLock<HookRegistry> = LazyLock::new(HookRegistry::new);

/// Returns the process-wide default registry, for embedders that want the
/// full [`HookRegistry`] surface.
pub fn default_registry() -> &'static HookRegistry {
    &DEFAULT_REGISTRY
}

/// Registers a callback on the default registry with the default priority
/// and a single accepted argument.
pub fn register_hook(hook_name: &str, callback: HookCallback) {
    DEFAULT_REGISTRY.register(hook_name, callback);
}

/// Registers a callback on the default registry at a specific priority with
/// a declared argument count.
pub fn register_hook_with(
    hook_name: &str,
    callback: HookCallback,
    priority: i32,
    accepted_args: usize,
) {
    DEFAULT_REGISTRY.register_with(hook_name, callback, priority, accepted_args);
}

/// Dispatches a hook on the default registry, folding its callbacks over
/// `value`. A hook nobody registered for returns `value` unchanged.
pub fn dispatch_hook(hook_name: &str, value: Value, extra: &[Value]) -> HookResult<Value> {
    DEFAULT_REGISTRY.dispatch(hook_name, value, extra)
}

/// Clears every registration on the default registry.
///
/// Used between independent test scenarios or process phases.
pub fn reset_hooks() {
    DEFAULT_REGISTRY.clear();
}
