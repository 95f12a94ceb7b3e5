//! LIFO command resolution.
//!
//! The dispatcher owns the [`Registry`] and routes each call to at most one
//! handler: the newest entry whose matcher accepts. Each call scans its own
//! snapshot, so handlers may register commands or dispatch again without
//! disturbing the scan that invoked them.

use std::cell::Cell;
use std::rc::Rc;

use chatcmd_foundation::ActorId;
use tracing::{debug, debug_span, trace};

use crate::config::DispatchConfig;
use crate::entry::{ArgHandler, CommandEntry};
use crate::fallback;
use crate::invocation::Invocation;
use crate::matcher::Matcher;
use crate::present::Presenter;
use crate::registry::{Registry, Snapshot};
use crate::tokenizer::CommandTokenizer;

/// What a dispatch call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler ran.
    Handled {
        /// Registration position of the entry that ran.
        position: usize,
        /// Label of the entry that ran, if visible.
        label: Option<String>,
    },
    /// No matcher accepted; nothing ran.
    Unhandled,
}

impl DispatchOutcome {
    /// Returns true if a handler ran.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }
}

/// Routes command calls to registered handlers.
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: Registry,
    /// Number of dispatch calls currently on the stack.
    depth: Cell<usize>,
}

impl Dispatcher {
    /// Creates a dispatcher with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher according to `config`.
    ///
    /// When the fallback is enabled it becomes the first entry, so every
    /// later registration takes priority over it.
    #[must_use]
    pub fn with_config(config: &DispatchConfig, presenter: Rc<dyn Presenter>) -> Self {
        let dispatcher = Self::new();
        if config.add_default_handler {
            fallback::install(&dispatcher, presenter, config.label_separator.clone());
        }
        dispatcher
    }

    /// The underlying registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Appends a prepared entry.
    pub fn add(&self, entry: CommandEntry) {
        self.registry.add(entry);
    }

    /// Registers a matcher and handler with an optional label.
    pub fn register(
        &self,
        matcher: impl Matcher + 'static,
        handler: impl ArgHandler + 'static,
        label: Option<&str>,
    ) {
        self.registry.register(matcher, handler, label);
    }

    /// Registers a handler for the exact command token `label`.
    pub fn register_command(&self, label: &str, handler: impl ArgHandler + 'static) {
        self.registry.register_command(label, handler);
    }

    /// Returns an immutable copy of the registry.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.registry.snapshot()
    }

    /// Number of dispatch calls currently executing (0 outside handlers).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Runs the newest handler whose matcher accepts the call.
    ///
    /// At most one handler runs. Unmatched calls are not an error; the
    /// outcome is [`DispatchOutcome::Unhandled`].
    pub fn dispatch(&self, actor: &ActorId, command: &str, args: &[String]) -> DispatchOutcome {
        let snapshot = self.registry.snapshot();
        let invocation = Invocation::new(actor, command, args);

        let span = debug_span!("dispatch", %actor, command, depth = self.depth.get());
        let _entered = span.enter();

        for (position, entry) in snapshot.iter_lifo() {
            let accepted = entry.matches(&invocation);
            trace!(position, label = entry.label(), accepted, "evaluated matcher");
            if !accepted {
                continue;
            }

            debug!(position, label = entry.label(), "handler selected");
            {
                let _nested = DepthGuard::enter(&self.depth);
                entry.invoke(self, &invocation);
            }
            return DispatchOutcome::Handled {
                position,
                label: entry.label().map(str::to_string),
            };
        }

        debug!("no handler matched");
        DispatchOutcome::Unhandled
    }

    /// Tokenizes a raw line and dispatches it for `actor`.
    ///
    /// The caller must already have checked that the line starts with the
    /// command prefix; the first character is dropped unconditionally.
    pub fn parse(&self, actor: &ActorId, raw_line: &str) -> DispatchOutcome {
        let line = CommandTokenizer::tokenize(raw_line);
        self.dispatch(actor, &line.command, &line.args)
    }
}

/// Tracks nesting while a handler runs; restores the depth even on unwind.
struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
}

impl<'a> DepthGuard<'a> {
    fn enter(depth: &'a Cell<usize>) -> Self {
        depth.set(depth.get() + 1);
        Self { depth }
    }
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}
