//! Convenience macros for hook registration.

/// Registers a callback on the default registry at the definition site.
///
/// Functionally identical to calling
/// [`register_hook_with`](crate::register_hook_with) with the same
/// arguments; the optional `priority:` and `accepted_args:` clauses fall
/// back to the registry defaults.
///
/// # Example
/// ```rust,ignore
/// register_hook!("content.render", unary(|v| Ok(v)));
/// register_hook!("content.render", priority: 5, unary(|v| Ok(v)));
/// register_hook!("title.join", accepted_args: 2, binary(|v, sep| Ok(v)));
/// register_hook!("title.join", priority: 5, accepted_args: 2, binary(|v, sep| Ok(v)));
/// ```
#[macro_export]
macro_rules! register_hook {
    ($name:expr, $callback:expr) => {
        $crate::register_hook_with(
            $name,
            $callback,
            $crate::DEFAULT_PRIORITY,
            $crate::DEFAULT_ACCEPTED_ARGS,
        )
    };
    ($name:expr, priority: $priority:expr, $callback:expr) => {
        $crate::register_hook_with($name, $callback, $priority, $crate::DEFAULT_ACCEPTED_ARGS)
    };
    ($name:expr, accepted_args: $accepted_args:expr, $callback:expr) => {
        $crate::register_hook_with($name, $callback, $crate::DEFAULT_PRIORITY, $accepted_args)
    };
    ($name:expr, priority: $priority:expr, accepted_args: $accepted_args:expr, $callback:expr) => {
        $crate::register_hook_with($name, $callback, $priority, $accepted_args)
    };
}
