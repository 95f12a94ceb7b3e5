//! Console session, presenters, timers, and CLI for chatcmd.
//!
//! This crate provides:
//! - [`Console`] - Interactive read-dispatch loop
//! - [`Session`] - Dispatcher wired to its collaborators
//! - [`ConsolePresenter`] - Plain-text output to a terminal
//! - [`TimerQueue`] - Deferred follow-up work for handlers
//! - [`Stdlib`] - Standard chat commands
//! - [`RuntimeConfig`] - TOML, environment, and CLI configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod console;
pub mod editor;
pub mod present;
pub mod session;
pub mod stdlib;
pub mod timer;

pub use config::RuntimeConfig;
pub use console::Console;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use present::ConsolePresenter;
pub use session::{LineOutcome, Session, SessionControl};
pub use stdlib::Stdlib;
pub use timer::TimerQueue;
