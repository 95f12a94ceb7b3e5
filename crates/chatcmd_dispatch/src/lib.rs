//! Command registry and dispatcher for chat-style text commands.
//!
//! Independent parts of an application register handlers for commands;
//! each incoming line is routed to exactly one of them.
//!
//! # Architecture
//!
//! ```text
//! "-remind me in 15 seconds"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → command "remind", args ["me", "in", "15", "seconds"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SNAPSHOT      │  → immutable copy of the registry at call time
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   LIFO SCAN     │  → newest entry first; first accepting matcher wins
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   HANDLER       │  → may send messages, register, or dispatch again
//! └─────────────────┘
//! ```
//!
//! When enabled, a catch-all fallback is registered before anything else,
//! so it is tried last and reports unknown commands.
//!
//! # Modules
//!
//! - [`invocation`] - Borrowed view of one command call
//! - [`matcher`] - Matcher trait and common matcher constructors
//! - [`entry`] - Handler trait and registry entries
//! - [`registry`] - Insertion-ordered entry list with snapshots
//! - [`tokenizer`] - Raw line to command and arguments
//! - [`dispatcher`] - LIFO resolution and re-entrant dispatch
//! - [`fallback`] - Unknown-command responder
//! - [`present`] - Presentation collaborator
//! - [`config`] - Dispatcher configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod dispatcher;
pub mod entry;
pub mod fallback;
pub mod invocation;
pub mod matcher;
pub mod present;
pub mod registry;
pub mod tokenizer;

// Re-export main types for convenience
pub use config::DispatchConfig;
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use entry::{ArgHandler, CommandEntry};
pub use invocation::Invocation;
pub use matcher::Matcher;
pub use present::{Message, Presenter, RecordingPresenter};
pub use registry::{Registry, Snapshot};
pub use tokenizer::{CommandLine, CommandTokenizer};
