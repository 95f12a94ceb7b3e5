//! chatcmd - Chat-command dispatcher
//!
//! This crate re-exports all layers of the chatcmd system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: chatcmd_runtime    — Console session, presenters, timers, CLI
//! Layer 1: chatcmd_dispatch   — Registry, tokenizer, LIFO dispatcher, fallback
//! Layer 0: chatcmd_foundation — Core types (ActorId, Error)
//! ```

pub use chatcmd_dispatch as dispatch;
pub use chatcmd_foundation as foundation;
pub use chatcmd_runtime as runtime;
