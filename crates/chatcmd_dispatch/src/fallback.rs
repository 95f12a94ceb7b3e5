//! Unknown-command responder.
//!
//! The fallback accepts every invocation and is registered before anything
//! else, so LIFO resolution tries it last. It lists the visible labels of
//! the registry as it stands when the fallback fires.

use std::rc::Rc;

use tracing::warn;

use crate::dispatcher::Dispatcher;
use crate::entry::CommandEntry;
use crate::invocation::Invocation;
use crate::matcher;
use crate::present::Presenter;

/// Registers the catch-all responder on `dispatcher`.
///
/// Must be the first registration; otherwise it shadows the entries that
/// came before it.
pub fn install(
    dispatcher: &Dispatcher,
    presenter: Rc<dyn Presenter>,
    separator: impl Into<String>,
) {
    if !dispatcher.registry().is_empty() {
        warn!(
            entries = dispatcher.registry().len(),
            "fallback installed after other commands; it will shadow them"
        );
    }

    let separator = separator.into();
    let handler = move |dispatcher: &Dispatcher, invocation: &Invocation<'_>| {
        let labels = dispatcher.registry().labels();
        let text = unknown_command_message(invocation.command, &labels, &separator);
        presenter.send(invocation.actor, &text);
    };
    dispatcher.add(CommandEntry::new(matcher::any(), handler));
}

/// Composes the unknown-command message.
#[must_use]
pub fn unknown_command_message(command: &str, labels: &[String], separator: &str) -> String {
    if labels.is_empty() {
        format!("Unknown command: {command}. No commands are available.")
    } else {
        format!(
            "Unknown command: {command}. Available commands: {}",
            labels.join(separator)
        )
    }
}
