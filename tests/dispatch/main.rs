//! Integration tests for Layer 1: Dispatch
//!
//! Tests for command registration and routing:
//! - Tokenization
//! - LIFO resolution
//! - Fallback listing
//! - Re-entrant dispatch and snapshot isolation

mod fallback_tests;
mod lifo_tests;
mod reentrancy_tests;
mod tokenizer_tests;
