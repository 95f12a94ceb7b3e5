//! The interactive console loop.

use std::io::{self, Write};
use std::time::Instant;

use chatcmd_foundation::Result;
use tracing::info;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// Reads lines from an editor and feeds them to a [`Session`].
pub struct Console<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (dispatcher, presenter, timers).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Console<RustylineEditor> {
    /// Creates a console on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Console<E> {
    /// Creates a console with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        let show_banner = session.config().show_banner;
        let prompt = session.config().prompt.clone();
        Self {
            editor,
            session,
            show_banner,
            prompt,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a reference to the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs until EOF or until a handler requests quit.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        info!(actor = %self.session.actor(), "console session started");

        while self.read_dispatch()? {}

        // Anything already due still gets delivered.
        self.session.tick(Instant::now());
        info!(actor = %self.session.actor(), "console session ended");
        Ok(())
    }

    /// Executes one read-dispatch iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_dispatch(&mut self) -> Result<bool> {
        self.refresh_completions();

        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if !input.trim().is_empty() {
            self.editor.add_history(&input);
        }

        self.session.handle_line(&input);
        self.session.tick(Instant::now());

        Ok(!self.session.should_quit())
    }

    /// Offers the current command names (with prefix) for completion.
    fn refresh_completions(&mut self) {
        let prefix = self.session.config().dispatch.prefix;
        let words = self
            .session
            .command_labels()
            .into_iter()
            .map(|label| format!("{prefix}{label}"))
            .collect();
        self.editor.set_completions(words);
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        let prefix = self.session.config().dispatch.prefix;
        println!("\x1b[1;36mchatcmd v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!(
            "Signed in as {}. Commands start with '{prefix}'; try {prefix}help. Ctrl+D exits.\n",
            self.session.actor()
        );
        let _ = io::stdout().flush();
    }
}
