//! A single command call as seen by matchers and handlers.

use chatcmd_foundation::ActorId;

/// Borrowed view of one command call: who issued it, the command token,
/// and the arguments that followed it.
///
/// Matchers that look at arguments must bounds-check them; [`Invocation::arg`]
/// returns `None` past the end instead of panicking.
#[derive(Clone, Copy, Debug)]
pub struct Invocation<'a> {
    /// Who issued the command.
    pub actor: &'a ActorId,
    /// The command token (prefix already stripped).
    pub command: &'a str,
    /// Arguments after the command token, in order.
    pub args: &'a [String],
}

impl<'a> Invocation<'a> {
    /// Creates a new invocation view.
    #[must_use]
    pub const fn new(actor: &'a ActorId, command: &'a str, args: &'a [String]) -> Self {
        Self {
            actor,
            command,
            args,
        }
    }

    /// Gets the argument at `index` (0 is the first argument after the command).
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }

    /// Number of arguments.
    #[must_use]
    pub const fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// All arguments joined by single spaces.
    #[must_use]
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }

    /// Arguments from `start` onward joined by single spaces.
    #[must_use]
    pub fn rest_from(&self, start: usize) -> String {
        self.args.get(start..).map_or_else(String::new, |tail| tail.join(" "))
    }
}
