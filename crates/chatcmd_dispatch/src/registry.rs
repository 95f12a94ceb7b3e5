//! Command registry.
//!
//! An insertion-ordered list of [`CommandEntry`] values. Registration only
//! appends; there is no removal and entries never change. Dispatch reads a
//! [`Snapshot`] instead of the live list, so handlers may register new
//! commands while a scan is in progress.
//!
//! The list is an `im::Vector`, so taking a snapshot is a structural-sharing
//! clone rather than a copy of every entry.

use std::cell::RefCell;
use std::rc::Rc;

use im::Vector;
use tracing::debug;

use crate::entry::{ArgHandler, CommandEntry};
use crate::matcher::Matcher;

/// Insertion-ordered registry of command entries.
#[derive(Debug, Default)]
pub struct Registry {
    entries: RefCell<Vector<Rc<CommandEntry>>>,
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the end of the registry.
    ///
    /// Duplicates and overlapping matchers are allowed; the newer entry
    /// shadows the older one during dispatch.
    pub fn add(&self, entry: CommandEntry) {
        let mut entries = self.entries.borrow_mut();
        debug!(
            label = entry.label().unwrap_or("<hidden>"),
            position = entries.len(),
            "registered command"
        );
        entries.push_back(Rc::new(entry));
    }

    /// Registers a matcher and handler with an optional label.
    pub fn register(
        &self,
        matcher: impl Matcher + 'static,
        handler: impl ArgHandler + 'static,
        label: Option<&str>,
    ) {
        let entry = CommandEntry::new(matcher, handler);
        let entry = match label {
            Some(label) => entry.with_label(label),
            None => entry,
        };
        self.add(entry);
    }

    /// Registers a handler for the exact command token `label`.
    pub fn register_command(&self, label: &str, handler: impl ArgHandler + 'static) {
        self.add(CommandEntry::command(label, handler));
    }

    /// Returns an immutable copy of the entries as they are right now.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            entries: self.entries.borrow().clone(),
        }
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Labels of visible entries, in registration order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.snapshot().labels().map(str::to_string).collect()
    }
}

/// Point-in-time copy of a registry.
#[derive(Clone, Debug)]
pub struct Snapshot {
    entries: Vector<Rc<CommandEntry>>,
}

impl Snapshot {
    /// Number of entries in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CommandEntry> + ExactSizeIterator {
        self.entries.iter().map(|entry| &**entry)
    }

    /// Entries newest first, paired with their registration position.
    pub fn iter_lifo(&self) -> impl Iterator<Item = (usize, &CommandEntry)> {
        self.iter().enumerate().rev()
    }

    /// Labels of visible entries, in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(CommandEntry::label)
    }
}
