//! Session state for the console.
//!
//! A [`Session`] wires a dispatcher to a presenter, a timer queue, and the
//! standard commands. It is the input-event collaborator: it decides which
//! lines are commands and hands those to the dispatcher.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use chatcmd_dispatch::{CommandTokenizer, DispatchOutcome, Dispatcher, Presenter};
use chatcmd_foundation::ActorId;
use tracing::debug;

use crate::config::RuntimeConfig;
use crate::stdlib::Stdlib;
use crate::timer::TimerQueue;

/// Flags a handler can raise to steer the session.
#[derive(Debug, Default)]
pub struct SessionControl {
    quit: Cell<bool>,
    line: Cell<u64>,
}

impl SessionControl {
    /// Creates a control with no requests pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the session to end after the current line.
    pub fn request_quit(&self) {
        self.quit.set(true);
    }

    /// Returns true if a quit was requested.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit.get()
    }

    /// Marks the start of a new input line.
    pub fn begin_line(&self) {
        self.line.set(self.line.get().wrapping_add(1));
    }

    /// Counter bumped by [`SessionControl::begin_line`].
    #[must_use]
    pub fn line(&self) -> u64 {
        self.line.get()
    }
}

/// What happened to one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was blank.
    Empty,
    /// The line did not start with the prefix and was relayed as chat.
    Chat,
    /// The line was dispatched as a command.
    Command(DispatchOutcome),
}

/// A chat session: dispatcher plus its collaborators.
pub struct Session {
    config: RuntimeConfig,
    actor: ActorId,
    dispatcher: Dispatcher,
    presenter: Rc<dyn Presenter>,
    timers: Rc<TimerQueue>,
    control: Rc<SessionControl>,
}

impl Session {
    /// Creates a session with the standard commands installed.
    #[must_use]
    pub fn new(config: RuntimeConfig, presenter: Rc<dyn Presenter>) -> Self {
        let session = Self::without_stdlib(config, presenter);
        Stdlib::new(
            Rc::clone(&session.presenter),
            Rc::clone(&session.timers),
            Rc::clone(&session.control),
            session.config.dispatch.label_separator.clone(),
        )
        .install(&session.dispatcher);
        session
    }

    /// Creates a session whose registry holds only the fallback (if enabled).
    #[must_use]
    pub fn without_stdlib(config: RuntimeConfig, presenter: Rc<dyn Presenter>) -> Self {
        let dispatcher = Dispatcher::with_config(&config.dispatch, Rc::clone(&presenter));
        Self {
            actor: ActorId::new(&config.actor),
            config,
            dispatcher,
            presenter,
            timers: Rc::new(TimerQueue::new()),
            control: Rc::new(SessionControl::new()),
        }
    }

    /// The session's configuration.
    #[must_use]
    pub const fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The actor typing at this session.
    #[must_use]
    pub const fn actor(&self) -> &ActorId {
        &self.actor
    }

    /// The dispatcher, for registering application commands.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The presenter used by the standard commands.
    #[must_use]
    pub fn presenter(&self) -> Rc<dyn Presenter> {
        Rc::clone(&self.presenter)
    }

    /// The timer queue for deferred work.
    #[must_use]
    pub fn timers(&self) -> Rc<TimerQueue> {
        Rc::clone(&self.timers)
    }

    /// The control flags shared with handlers.
    #[must_use]
    pub fn control(&self) -> Rc<SessionControl> {
        Rc::clone(&self.control)
    }

    /// Returns true once a handler has asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.control.quit_requested()
    }

    /// Handles a line typed by the session's actor.
    pub fn handle_line(&self, line: &str) -> LineOutcome {
        self.handle_line_as(&self.actor, line)
    }

    /// Handles a line attributed to `actor`.
    ///
    /// Lines starting with the configured prefix are dispatched; other
    /// non-blank lines are relayed back as chat.
    pub fn handle_line_as(&self, actor: &ActorId, line: &str) -> LineOutcome {
        if line.trim().is_empty() {
            return LineOutcome::Empty;
        }
        self.control.begin_line();

        if CommandTokenizer::has_prefix(line, self.config.dispatch.prefix) {
            return LineOutcome::Command(self.dispatcher.parse(actor, line));
        }

        debug!(%actor, "relaying chat line");
        self.presenter.send(actor, line);
        LineOutcome::Chat
    }

    /// Runs deferred tasks due at `now`; returns how many ran.
    pub fn tick(&self, now: Instant) -> usize {
        self.timers.run_due(now)
    }

    /// Visible command labels, in registration order.
    #[must_use]
    pub fn command_labels(&self) -> Vec<String> {
        self.dispatcher.registry().labels()
    }
}
