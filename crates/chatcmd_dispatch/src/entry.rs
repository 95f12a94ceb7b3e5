//! Registry entries and the handler trait.

use std::fmt;

use crate::dispatcher::Dispatcher;
use crate::invocation::Invocation;
use crate::matcher::{self, Matcher};

/// Side-effecting procedure run for an accepted invocation.
///
/// Handlers receive the dispatcher that selected them, so they can register
/// further commands or dispatch sub-commands re-entrantly. Any
/// `Fn(&Dispatcher, &Invocation)` closure is a handler.
pub trait ArgHandler {
    /// Runs the handler.
    fn handle(&self, dispatcher: &Dispatcher, invocation: &Invocation<'_>);
}

impl<F> ArgHandler for F
where
    F: Fn(&Dispatcher, &Invocation<'_>),
{
    fn handle(&self, dispatcher: &Dispatcher, invocation: &Invocation<'_>) {
        self(dispatcher, invocation);
    }
}

/// A registered command: matcher, handler, and an optional label.
///
/// Entries without a label are hidden from the unknown-command listing.
/// Entries are immutable once constructed.
pub struct CommandEntry {
    matcher: Box<dyn Matcher>,
    handler: Box<dyn ArgHandler>,
    label: Option<String>,
}

impl CommandEntry {
    /// Creates a hidden entry from a matcher and handler.
    #[must_use]
    pub fn new(matcher: impl Matcher + 'static, handler: impl ArgHandler + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
            handler: Box::new(handler),
            label: None,
        }
    }

    /// Creates a visible entry that accepts exactly the command `label`.
    #[must_use]
    pub fn command(label: impl Into<String>, handler: impl ArgHandler + 'static) -> Self {
        let label = label.into();
        Self::new(matcher::exact(label.clone()), handler).with_label(label)
    }

    /// Sets the label shown in the unknown-command listing.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The entry's label, if visible.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns true if the entry appears in the unknown-command listing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.label.is_some()
    }

    /// Evaluates the entry's matcher.
    #[must_use]
    pub fn matches(&self, invocation: &Invocation<'_>) -> bool {
        self.matcher.matches(invocation)
    }

    /// Runs the entry's handler.
    pub fn invoke(&self, dispatcher: &Dispatcher, invocation: &Invocation<'_>) {
        self.handler.handle(dispatcher, invocation);
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
