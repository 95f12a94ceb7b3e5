//! Standard chat commands.
//!
//! | Command                               | Effect                                  |
//! |---------------------------------------|-----------------------------------------|
//! | `help`                                | list visible commands                   |
//! | `echo <text>`                         | send the text back                      |
//! | `whoami`                              | show the actor name                     |
//! | `remind me in <n> seconds [text]`     | timed reminder (also `minutes`)         |
//! | `alias <name> <command> [args]`       | register a shortcut at runtime          |
//! | `clear`                               | clear the actor's display               |
//! | `quit`                                | end the console session                 |
//! | `!<chars>`                            | run each character as its own command   |

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use chatcmd_dispatch::matcher;
use chatcmd_dispatch::{Dispatcher, Invocation, Presenter};
use chatcmd_foundation::ActorId;
use tracing::{debug, warn};

use crate::session::SessionControl;
use crate::timer::TimerQueue;

/// How long a reminder stays on screen.
pub const REMINDER_DISPLAY: Duration = Duration::from_secs(10);

/// Longest delay `remind` accepts.
pub const MAX_REMINDER_DELAY: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Nesting limit for alias expansion.
pub const MAX_ALIAS_DEPTH: usize = 16;

/// Alias expansions allowed for one top-level command.
pub const MAX_ALIAS_EXPANSIONS: usize = 256;

const REMIND_USAGE: &str = "Usage: remind me in <n> seconds|minutes [message]";
const ALIAS_USAGE: &str = "Usage: alias <name> <command> [args...]";

/// Alias expansions spent by the command currently running.
///
/// Reset on each new session line, and whenever an alias runs at depth 1
/// (a top-level command dispatched without a session).
#[derive(Debug, Default)]
struct ExpansionBudget {
    line: Cell<u64>,
    used: Cell<usize>,
    halted: Cell<bool>,
}

impl ExpansionBudget {
    fn reset(&self, line: u64) {
        self.line.set(line);
        self.used.set(0);
        self.halted.set(false);
    }

    fn is_stale(&self, line: u64) -> bool {
        self.line.get() != line
    }

    /// Spends one expansion; false once the budget is gone.
    fn spend(&self) -> bool {
        let used = self.used.get() + 1;
        self.used.set(used);
        used <= MAX_ALIAS_EXPANSIONS
    }

    /// True only for the first halt since the last reset.
    fn halt(&self) -> bool {
        !self.halted.replace(true)
    }
}

/// Installs the standard commands on a dispatcher.
pub struct Stdlib {
    presenter: Rc<dyn Presenter>,
    timers: Rc<TimerQueue>,
    control: Rc<SessionControl>,
    separator: String,
}

impl Stdlib {
    /// Creates the installer.
    #[must_use]
    pub fn new(
        presenter: Rc<dyn Presenter>,
        timers: Rc<TimerQueue>,
        control: Rc<SessionControl>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            presenter,
            timers,
            control,
            separator: separator.into(),
        }
    }

    /// Registers every standard command.
    pub fn install(&self, dispatcher: &Dispatcher) {
        self.install_help(dispatcher);
        self.install_echo(dispatcher);
        self.install_whoami(dispatcher);
        self.install_remind(dispatcher);
        self.install_alias(dispatcher);
        self.install_clear(dispatcher);
        self.install_quit(dispatcher);
        install_fan_out(dispatcher);
    }

    fn install_help(&self, dispatcher: &Dispatcher) {
        let presenter = Rc::clone(&self.presenter);
        let separator = self.separator.clone();
        dispatcher.register_command("help", move |d: &Dispatcher, inv: &Invocation<'_>| {
            let labels = d.registry().labels();
            presenter.send(inv.actor, &format!("Commands: {}", labels.join(&separator)));
        });
    }

    fn install_echo(&self, dispatcher: &Dispatcher) {
        let presenter = Rc::clone(&self.presenter);
        dispatcher.register_command("echo", move |_: &Dispatcher, inv: &Invocation<'_>| {
            presenter.send(inv.actor, &inv.rest());
        });
    }

    fn install_whoami(&self, dispatcher: &Dispatcher) {
        let presenter = Rc::clone(&self.presenter);
        dispatcher.register_command("whoami", move |_: &Dispatcher, inv: &Invocation<'_>| {
            presenter.send(inv.actor, &format!("You are {}.", inv.actor));
        });
    }

    fn install_remind(&self, dispatcher: &Dispatcher) {
        let presenter = Rc::clone(&self.presenter);
        let timers = Rc::clone(&self.timers);
        dispatcher.register_command("remind", move |_: &Dispatcher, inv: &Invocation<'_>| {
            let Some((delay, text)) = parse_reminder(inv) else {
                presenter.send(inv.actor, REMIND_USAGE);
                return;
            };

            let actor: ActorId = inv.actor.clone();
            let later = Rc::clone(&presenter);
            let scheduled = timers.schedule(delay, move || {
                later.send_timed(&actor, &format!("Reminder: {text}"), REMINDER_DISPLAY);
            });
            if scheduled.is_none() {
                presenter.send(inv.actor, REMIND_USAGE);
                return;
            }

            presenter.send(
                inv.actor,
                &format!("Okay, I'll remind you in {}.", describe_delay(delay)),
            );
        });
    }

    fn install_alias(&self, dispatcher: &Dispatcher) {
        let presenter = Rc::clone(&self.presenter);
        let control = Rc::clone(&self.control);
        let budget = Rc::new(ExpansionBudget::default());
        dispatcher.register_command("alias", move |d: &Dispatcher, inv: &Invocation<'_>| {
            let (Some(name), Some(target)) = (inv.arg(0), inv.arg(1)) else {
                presenter.send(inv.actor, ALIAS_USAGE);
                return;
            };
            if name.is_empty() || target.is_empty() {
                presenter.send(inv.actor, ALIAS_USAGE);
                return;
            }
            if name == target {
                presenter.send(inv.actor, &format!("An alias cannot point to itself: {name}"));
                return;
            }

            let target = target.to_string();
            let bound: Vec<String> = inv.args[2..].to_vec();
            let loop_presenter = Rc::clone(&presenter);
            let budget = Rc::clone(&budget);
            let control = Rc::clone(&control);
            d.register_command(name, move |d: &Dispatcher, inv: &Invocation<'_>| {
                let line = control.line();
                if d.depth() == 1 || budget.is_stale(line) {
                    budget.reset(line);
                }
                if d.depth() > MAX_ALIAS_DEPTH || !budget.spend() {
                    if budget.halt() {
                        warn!(command = inv.command, depth = d.depth(), "alias expansion halted");
                        let text = format!("Alias loop detected at {}.", inv.command);
                        loop_presenter.send(inv.actor, &text);
                    }
                    return;
                }
                let mut args = bound.clone();
                args.extend(inv.args.iter().cloned());
                d.dispatch(inv.actor, &target, &args);
            });

            debug!(name, target = inv.arg(1), "alias registered");
            presenter.send(inv.actor, &format!("Alias {name} -> {}", inv.rest_from(1)));
        });
    }

    fn install_clear(&self, dispatcher: &Dispatcher) {
        let presenter = Rc::clone(&self.presenter);
        dispatcher.register_command("clear", move |_: &Dispatcher, inv: &Invocation<'_>| {
            presenter.clear(inv.actor);
        });
    }

    fn install_quit(&self, dispatcher: &Dispatcher) {
        let presenter = Rc::clone(&self.presenter);
        let control = Rc::clone(&self.control);
        dispatcher.register_command("quit", move |_: &Dispatcher, inv: &Invocation<'_>| {
            control.request_quit();
            presenter.send(inv.actor, "Goodbye.");
        });
    }
}

/// `!abc` runs `a`, `b`, then `c`. Hidden from listings.
fn install_fan_out(dispatcher: &Dispatcher) {
    dispatcher.register(
        matcher::prefixed("!"),
        |d: &Dispatcher, inv: &Invocation<'_>| {
            for ch in inv.command.chars().skip(1) {
                d.dispatch(inv.actor, ch.encode_utf8(&mut [0; 4]), &[]);
            }
        },
        None,
    );
}

/// Reads `me in <n> <unit> [message...]`.
///
/// Returns `None` for anything else, including short argument lists.
#[must_use]
pub fn parse_reminder(inv: &Invocation<'_>) -> Option<(Duration, String)> {
    if inv.arg(0)? != "me" || inv.arg(1)? != "in" {
        return None;
    }
    let amount: u64 = inv.arg(2)?.parse().ok()?;
    let delay = match inv.arg(3)? {
        "second" | "seconds" | "sec" | "secs" => Duration::from_secs(amount),
        "minute" | "minutes" | "min" | "mins" => Duration::from_secs(amount.checked_mul(60)?),
        _ => return None,
    };
    if delay > MAX_REMINDER_DELAY {
        return None;
    }

    let text = inv.rest_from(4);
    let text = if text.trim().is_empty() {
        "time's up!".to_string()
    } else {
        text
    };
    Some((delay, text))
}

fn describe_delay(delay: Duration) -> String {
    match delay.as_secs() {
        1 => "1 second".to_string(),
        secs => format!("{secs} seconds"),
    }
}
