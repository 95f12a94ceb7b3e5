//! Core types and errors for chatcmd.
//!
//! This crate provides:
//! - [`ActorId`] - Identifies who issued a command
//! - [`Error`] - Error types with context for the fallible outer layers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod actor;
pub mod error;

pub use actor::ActorId;
pub use error::{Error, ErrorKind, Result};
