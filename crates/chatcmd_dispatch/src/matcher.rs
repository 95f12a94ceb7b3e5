//! Matchers decide whether a registry entry accepts an invocation.
//!
//! A matcher is a pure predicate. It may close over comparison data
//! (an expected command name, a prefix) but keeps no mutable state.
//! Any `Fn(&Invocation) -> bool` closure is a matcher.

use crate::invocation::Invocation;

/// Predicate over an invocation.
///
/// Implementations must not panic on short argument lists: use
/// [`Invocation::arg`] rather than indexing `args` directly.
pub trait Matcher {
    /// Returns true if this entry should handle the invocation.
    fn matches(&self, invocation: &Invocation<'_>) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&Invocation<'_>) -> bool,
{
    fn matches(&self, invocation: &Invocation<'_>) -> bool {
        self(invocation)
    }
}

/// Accepts when the command token equals `name` exactly (case-sensitive).
#[must_use]
pub fn exact(name: impl Into<String>) -> impl Matcher + 'static {
    let name = name.into();
    move |inv: &Invocation<'_>| inv.command == name
}

/// Accepts every invocation.
#[must_use]
pub fn any() -> impl Matcher + 'static {
    |_: &Invocation<'_>| true
}

/// Accepts when the command token starts with `prefix` and has at least
/// one character after it.
#[must_use]
pub fn prefixed(prefix: impl Into<String>) -> impl Matcher + 'static {
    let prefix = prefix.into();
    move |inv: &Invocation<'_>| {
        inv.command.len() > prefix.len() && inv.command.starts_with(prefix.as_str())
    }
}

/// Accepts when the command token equals `name` and exactly `count`
/// arguments follow it.
#[must_use]
pub fn with_args(name: impl Into<String>, count: usize) -> impl Matcher + 'static {
    let name = name.into();
    move |inv: &Invocation<'_>| inv.command == name && inv.arg_count() == count
}
