//! chatcmd CLI entry point.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use chatcmd_foundation::Result;
use chatcmd_foundation::error::ErrorContext;
use chatcmd_runtime::{Console, ConsolePresenter, RuntimeConfig, ScriptedEditor, Session};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Chat-command console: type `-help` to list commands.
#[derive(Parser, Debug)]
#[command(name = "chatcmd", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Leave unknown commands silently unhandled
    #[arg(long)]
    no_default_handler: bool,

    /// Character that marks a line as a command
    #[arg(short, long, value_name = "CHAR")]
    prefix: Option<char>,

    /// Name to issue commands as
    #[arg(short, long, value_name = "NAME")]
    actor: Option<String>,

    /// Read lines from a file instead of the terminal, then exit
    #[arg(short, long, value_name = "FILE")]
    batch: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e.context {
                Some(ctx) => eprintln!("\x1b[31mError: {e} {ctx}\x1b[0m"),
                None => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Builds the configuration: file, then environment, then flags.
fn load_config(cli: &Cli) -> Result<RuntimeConfig> {
    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    config.apply_env()?;

    if cli.no_default_handler {
        config.dispatch.add_default_handler = false;
    }
    if let Some(prefix) = cli.prefix {
        config.dispatch.prefix = prefix;
    }
    if let Some(actor) = &cli.actor {
        config.actor.clone_from(actor);
    }
    if cli.no_banner || cli.batch.is_some() {
        config.show_banner = false;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let session = Session::new(config, Rc::new(ConsolePresenter::stdout()));

    if let Some(path) = &cli.batch {
        let text = fs::read_to_string(path).map_err(|e| {
            chatcmd_foundation::Error::from(e).with_context(ErrorContext::new().with_path(path))
        })?;
        let mut console = Console::with_editor(ScriptedEditor::from_text(&text), session);
        return console.run();
    }

    Console::new(session)?.run()
}
