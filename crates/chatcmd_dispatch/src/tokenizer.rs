//! Input tokenization.
//!
//! Converts a raw command line into a command token and its arguments.

/// A tokenized command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandLine {
    /// The command token.
    pub command: String,
    /// Arguments after the command token, in order.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Creates a command line from its parts.
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

/// Tokenizes raw command lines.
pub struct CommandTokenizer;

impl CommandTokenizer {
    /// Tokenizes a raw line whose first character is the command prefix.
    ///
    /// - Drops the first character without checking what it is
    /// - Splits the rest on single spaces, so consecutive spaces yield
    ///   empty arguments
    /// - No quoting or escaping; case is preserved
    #[must_use]
    pub fn tokenize(raw_line: &str) -> CommandLine {
        let mut chars = raw_line.chars();
        chars.next();

        let mut parts = chars.as_str().split(' ');
        let command = parts.next().unwrap_or_default().to_string();
        let args = parts.map(str::to_string).collect();

        CommandLine { command, args }
    }

    /// Returns true if `line` begins with `prefix`.
    ///
    /// Input sources check this before handing a line to the dispatcher.
    #[must_use]
    pub fn has_prefix(line: &str, prefix: char) -> bool {
        line.starts_with(prefix)
    }
}
