//! Console loop tests.
//!
//! Runs scripted input through the console and checks the rendered output.

use std::rc::Rc;

use chatcmd_dispatch::DispatchConfig;
use chatcmd_runtime::{Console, ConsolePresenter, RuntimeConfig, ScriptedEditor, Session};

/// Runs `script` for actor "alice" and returns everything the presenter wrote.
fn run_script(config: RuntimeConfig, script: &str) -> String {
    let presenter = Rc::new(ConsolePresenter::new(Vec::new()));
    let session = Session::new(config.with_actor("alice").with_banner(false), presenter.clone());
    let mut console = Console::with_editor(ScriptedEditor::from_text(script), session);
    console.run().unwrap();
    drop(console);

    let presenter = Rc::try_unwrap(presenter).ok().unwrap();
    String::from_utf8(presenter.into_inner()).unwrap()
}

#[test]
fn script_renders_chat_and_commands() {
    let output = run_script(RuntimeConfig::default(), "hello\n-echo hi\n\n-whoami\n");

    assert_eq!(output, "[alice] hello\n[alice] hi\n[alice] You are alice.\n");
}

#[test]
fn quit_ends_script_early() {
    let output = run_script(RuntimeConfig::default(), "-quit\n-echo never\n");

    assert_eq!(output, "[alice] Goodbye.\n");
}

#[test]
fn no_default_handler_drops_unknown_commands() {
    let config = RuntimeConfig::default()
        .with_dispatch(DispatchConfig::default().with_default_handler(false));
    let output = run_script(config, "-zzz\n-echo ok\n");

    assert_eq!(output, "[alice] ok\n");
}

#[test]
fn config_file_settings_apply() {
    let config = RuntimeConfig::from_toml_str(
        r#"
        [dispatch]
        prefix = "/"
        label_separator = " | "
        "#,
    )
    .unwrap();
    let output = run_script(config, "-echo plain\n/nope\n");

    assert_eq!(
        output,
        "[alice] -echo plain\n[alice] Unknown command: nope. Available commands: \
         help | echo | whoami | remind | alias | clear | quit\n"
    );
}
