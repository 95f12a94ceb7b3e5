//! Integration tests for Layer 2: Runtime
//!
//! Tests for the console session and standard commands.

mod console_tests;
