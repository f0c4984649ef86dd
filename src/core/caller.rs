//! Caller-namespace resolution
//!
//! When construction options omit an explicit logger name, the facade derives
//! one from the call stack: the first frame outside this crate contributes
//! its qualified function name, and the namespace is everything before the
//! final `::` path separator. This is a best-effort heuristic; it never fails
//! and degrades to the `"unknown"` sentinel when the stack yields nothing.

/// Sentinel name used when no caller namespace can be resolved.
pub const UNKNOWN_NAMESPACE: &str = "unknown";

/// Extract the namespace from a qualified function name.
///
/// The search window ends at the first `(` (some symbolizers append
/// annotations like ` (inlined)`); within it, the namespace is the text
/// before the last `::` separator. No separator means an empty namespace.
///
/// Expects demangled, hash-free symbol names:
/// `"myapp::net::connect"` yields `"myapp::net"`.
pub(crate) fn namespace_of(func_name: &str) -> &str {
    let window = match func_name.find('(') {
        Some(pos) => &func_name[..pos],
        None => func_name,
    };

    match window.rfind("::") {
        Some(pos) => &window[..pos],
        None => "",
    }
}

/// Frames that belong to the facade itself or the unwinding machinery are
/// never the caller.
fn is_internal(namespace: &str) -> bool {
    const CRATE: &str = env!("CARGO_CRATE_NAME");
    namespace
        .strip_prefix(CRATE)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
        || namespace.starts_with("backtrace")
        || namespace.starts_with("std::")
        || namespace.starts_with("core::")
        || namespace.starts_with("alloc::")
}

/// Walk the active call stack outward and return the first external
/// namespace, or [`UNKNOWN_NAMESPACE`] when the stack is exhausted.
pub(crate) fn calling_namespace() -> String {
    let mut found: Option<String> = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() {
                return;
            }
            if let Some(name) = symbol.name() {
                // Alternate formatting demangles and drops the trailing hash
                let demangled = format!("{:#}", name);
                let ns = namespace_of(&demangled);
                if !ns.is_empty() && !is_internal(ns) {
                    found = Some(ns.to_string());
                }
            }
        });
        found.is_none()
    });

    found.unwrap_or_else(|| UNKNOWN_NAMESPACE.to_string())
}
