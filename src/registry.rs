//! Hook registry — callbacks register by hook name with priority ordering,
//! and dispatch folds them over a running value.
//!
//! Ordering rules:
//! - Callbacks run in ascending numeric priority order (lower first).
//! - Within one priority, callbacks run in the exact order they were
//!   registered; they are never reordered or deduplicated.
//! - Cross-priority order is governed only by the numeric priority, never by
//!   a global insertion order.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use serde_json::Value;
use tracing::{debug, info};

use crate::definitions::{
    DEFAULT_ACCEPTED_ARGS, DEFAULT_PRIORITY, HookCallback, HookEntry, HookEntryInfo,
};
use crate::result::HookResult;

/// Entries registered at one exact priority, in registration order.
type PrioritySlot = Vec<HookEntry>;

/// Ordered mapping from priority to that priority's entries. `BTreeMap`
/// iteration yields the ascending-priority merge at dispatch time.
type PriorityTable = BTreeMap<i32, PrioritySlot>;

/// Registry of hook callbacks organized by hook name.
///
/// A single coarse lock guards registration and the entry-collection phase
/// of dispatch. Callbacks are invoked after the guard is dropped, so user
/// code never runs under the lock and a callback may itself register further
/// hooks.
#[derive(Debug)]
pub struct HookRegistry {
    /// Hook name → priority → insertion-ordered entries.
    hooks: RwLock<HashMap<String, PriorityTable>>,
}

impl HookRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            hooks: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a callback with the default priority (10) and a single
    /// accepted argument.
    pub fn register(&self, hook_name: &str, callback: HookCallback) {
        self.register_with(hook_name, callback, DEFAULT_PRIORITY, DEFAULT_ACCEPTED_ARGS);
    }

    /// Registers a callback at a specific priority with a declared argument
    /// count.
    ///
    /// Registration only ever appends: repeated registration of the same
    /// callback creates a second, independent entry that will run a second
    /// time. The declared `accepted_args` is trusted as-is; a mismatch with
    /// the callback's real arity surfaces at dispatch time, not here.
    pub fn register_with(
        &self,
        hook_name: &str,
        callback: HookCallback,
        priority: i32,
        accepted_args: usize,
    ) {
        let mut hooks = self.hooks.write().unwrap_or_else(|e| e.into_inner());
        hooks
            .entry(hook_name.to_string())
            .or_default()
            .entry(priority)
            .or_default()
            .push(HookEntry {
                hook_name: hook_name.to_string(),
                callback,
                accepted_args,
            });
        drop(hooks);

        info!(
            hook = hook_name,
            priority, accepted_args, "Hook callback registered"
        );
    }

    /// Dispatches a hook, folding every registered callback over `value`.
    ///
    /// Each callback receives the buffer `[current, extra...]` truncated to
    /// its declared `accepted_args`: a prefix when the declaration is
    /// smaller than the available values, and however many values exist (no
    /// synthetic padding) when it is larger. The callback's return value
    /// becomes the new running value.
    ///
    /// A hook nobody registered for returns `value` unchanged, whatever the
    /// value, including 0, false, empty strings and empty containers. The
    /// first callback error aborts the fold and propagates unmodified; no
    /// later callback runs and no default value is substituted.
    pub fn dispatch(&self, hook_name: &str, value: Value, extra: &[Value]) -> HookResult<Value> {
        let entries = self.entries(hook_name);
        if entries.is_empty() {
            return Ok(value);
        }

        debug!(
            hook = hook_name,
            entries = entries.len(),
            "Dispatching hook"
        );

        let mut current = value;
        for entry in &entries {
            let mut args = Vec::with_capacity(entry.accepted_args.min(1 + extra.len()));
            args.push(current);
            args.extend(
                extra
                    .iter()
                    .take(entry.accepted_args.saturating_sub(1))
                    .cloned(),
            );
            // accepted_args of 0 is not validated: the running value is
            // dropped and the callback invoked with nothing.
            args.truncate(entry.accepted_args);

            current = (entry.callback)(&args).inspect_err(|err| {
                debug!(hook = hook_name, error = %err, "Hook callback failed");
            })?;
        }

        Ok(current)
    }

    /// Returns the ordered entry snapshot for a hook: ascending priority,
    /// insertion order within a priority.
    ///
    /// Each dispatch collects its own snapshot, so an in-flight fold is
    /// unaffected by registrations that happen after its collection step.
    pub fn entries(&self, hook_name: &str) -> Vec<HookEntry> {
        let hooks = self.hooks.read().unwrap_or_else(|e| e.into_inner());
        hooks
            .get(hook_name)
            .map(|table| table.values().flatten().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns whether any callbacks are registered for a hook.
    pub fn has_entries(&self, hook_name: &str) -> bool {
        let hooks = self.hooks.read().unwrap_or_else(|e| e.into_inner());
        hooks
            .get(hook_name)
            .is_some_and(|table| table.values().any(|slot| !slot.is_empty()))
    }

    /// Returns the number of callbacks registered for a hook.
    pub fn entry_count(&self, hook_name: &str) -> usize {
        let hooks = self.hooks.read().unwrap_or_else(|e| e.into_inner());
        hooks
            .get(hook_name)
            .map(|table| table.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Returns all hook names with at least one registered callback.
    pub fn hook_names(&self) -> Vec<String> {
        let hooks = self.hooks.read().unwrap_or_else(|e| e.into_inner());
        hooks.keys().cloned().collect()
    }

    /// Returns serializable descriptors for a hook's entries, in dispatch
    /// order.
    pub fn entries_info(&self, hook_name: &str) -> Vec<HookEntryInfo> {
        let hooks = self.hooks.read().unwrap_or_else(|e| e.into_inner());
        hooks
            .get(hook_name)
            .map(|table| {
                table
                    .iter()
                    .flat_map(|(priority, slot)| {
                        slot.iter().map(|entry| HookEntryInfo {
                            hook_name: entry.hook_name.clone(),
                            priority: *priority,
                            accepted_args: entry.accepted_args,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Removes every registration, leaving the registry empty.
    ///
    /// Entries otherwise live for the registry's lifetime; there is no
    /// eviction or expiry.
    pub fn clear(&self) {
        let mut hooks = self.hooks.write().unwrap_or_else(|e| e.into_inner());
        *hooks = HashMap::new();
        drop(hooks);

        debug!("Hook registry cleared");
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
