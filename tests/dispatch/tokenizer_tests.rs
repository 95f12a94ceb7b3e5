//! Tokenizer tests.
//!
//! Tests for converting raw command lines to command and arguments.

use chatcmd_dispatch::{CommandLine, CommandTokenizer};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn tokenize_help() {
    let line = CommandTokenizer::tokenize("-help");

    assert_eq!(line.command, "help");
    assert!(line.args.is_empty());
}

#[test]
fn tokenize_remind() {
    let line = CommandTokenizer::tokenize("-remind me in 15 seconds");

    assert_eq!(line.command, "remind");
    assert_eq!(line.args, strings(&["me", "in", "15", "seconds"]));
}

#[test]
fn tokenize_preserves_case() {
    let line = CommandTokenizer::tokenize("-Echo HELLO");

    assert_eq!(line, CommandLine::new("Echo", strings(&["HELLO"])));
}

#[test]
fn tokenize_consecutive_spaces_make_empty_args() {
    let line = CommandTokenizer::tokenize("-say  hi");

    assert_eq!(line.args, strings(&["", "hi"]));
}

#[test]
fn tokenize_space_after_prefix_gives_empty_command() {
    let line = CommandTokenizer::tokenize("- help");

    assert_eq!(line.command, "");
    assert_eq!(line.args, strings(&["help"]));
}

#[test]
fn tokenize_no_quoting() {
    let line = CommandTokenizer::tokenize("-say \"hello world\"");

    assert_eq!(line.args, strings(&["\"hello", "world\""]));
}

#[test]
fn tokenize_tabs_are_not_separators() {
    let line = CommandTokenizer::tokenize("-echo a\tb");

    assert_eq!(line.args, strings(&["a\tb"]));
}
