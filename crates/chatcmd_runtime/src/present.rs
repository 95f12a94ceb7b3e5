//! Console presentation.

use std::cell::RefCell;
use std::io::{self, Write};
use std::time::Duration;

use chatcmd_dispatch::Presenter;
use chatcmd_foundation::ActorId;
use tracing::warn;

/// Presenter that writes `[actor] text` lines to a writer.
pub struct ConsolePresenter<W: Write = io::Stdout> {
    out: RefCell<W>,
}

impl ConsolePresenter<io::Stdout> {
    /// Creates a presenter writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Consumes the presenter and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            warn!(error = %e, "failed to write to console");
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn send(&self, actor: &ActorId, text: &str) {
        self.write_line(&format!("[{actor}] {text}"));
    }

    fn send_timed(&self, actor: &ActorId, text: &str, duration: Duration) {
        self.write_line(&format!("[{actor}] {text} ({}s)", duration.as_secs()));
    }

    fn clear(&self, actor: &ActorId) {
        self.write_line(&format!("[{actor}] ----"));
    }
}
