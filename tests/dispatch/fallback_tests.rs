//! Default handler tests.
//!
//! The fallback answers unmatched commands with the visible labels, in
//! registration order, as they stand when it fires.

use std::rc::Rc;

use chatcmd_dispatch::matcher;
use chatcmd_dispatch::{DispatchConfig, DispatchOutcome, Dispatcher, Invocation, RecordingPresenter};
use chatcmd_foundation::ActorId;

fn noop(_: &Dispatcher, _: &Invocation<'_>) {}

fn dispatcher_with_fallback() -> (Dispatcher, Rc<RecordingPresenter>) {
    let presenter = Rc::new(RecordingPresenter::new());
    let dispatcher = Dispatcher::with_config(&DispatchConfig::default(), presenter.clone());
    (dispatcher, presenter)
}

#[test]
fn unknown_command_lists_labels_in_registration_order() {
    let (dispatcher, presenter) = dispatcher_with_fallback();
    dispatcher.register_command("help", noop);
    dispatcher.register_command("echo", noop);

    let alice = ActorId::new("alice");
    dispatcher.parse(&alice, "-zzz");

    assert_eq!(
        presenter.texts_for(&alice),
        vec!["Unknown command: zzz. Available commands: help, echo"]
    );
}

#[test]
fn hidden_entries_are_not_listed() {
    let (dispatcher, presenter) = dispatcher_with_fallback();
    dispatcher.register_command("help", noop);
    dispatcher.register(matcher::prefixed("!"), noop, None);

    let alice = ActorId::new("alice");
    dispatcher.dispatch(&alice, "zzz", &[]);

    assert_eq!(
        presenter.texts_for(&alice),
        vec!["Unknown command: zzz. Available commands: help"]
    );
}

#[test]
fn known_command_does_not_reach_fallback() {
    let (dispatcher, presenter) = dispatcher_with_fallback();
    dispatcher.register_command("help", noop);

    let outcome = dispatcher.dispatch(&ActorId::new("alice"), "help", &[]);

    assert_eq!(
        outcome,
        DispatchOutcome::Handled {
            position: 1,
            label: Some("help".to_string())
        }
    );
    assert!(presenter.messages().is_empty());
}

#[test]
fn empty_command_reaches_fallback() {
    let (dispatcher, presenter) = dispatcher_with_fallback();

    let alice = ActorId::new("alice");
    dispatcher.parse(&alice, "-");

    assert_eq!(
        presenter.texts_for(&alice),
        vec!["Unknown command: . No commands are available."]
    );
}

#[test]
fn reply_goes_to_invoking_actor() {
    let (dispatcher, presenter) = dispatcher_with_fallback();

    dispatcher.dispatch(&ActorId::new("bob"), "zzz", &[]);

    assert!(presenter.texts_for(&ActorId::new("alice")).is_empty());
    assert_eq!(presenter.texts_for(&ActorId::new("bob")).len(), 1);
}

#[test]
fn disabled_fallback_leaves_commands_unhandled() {
    let presenter = Rc::new(RecordingPresenter::new());
    let config = DispatchConfig::default().with_default_handler(false);
    let dispatcher = Dispatcher::with_config(&config, presenter.clone());
    dispatcher.register_command("help", noop);

    let outcome = dispatcher.dispatch(&ActorId::new("alice"), "zzz", &[]);

    assert_eq!(outcome, DispatchOutcome::Unhandled);
    assert!(presenter.messages().is_empty());
}

#[test]
fn custom_separator() {
    let presenter = Rc::new(RecordingPresenter::new());
    let config = DispatchConfig::default().with_label_separator(" / ");
    let dispatcher = Dispatcher::with_config(&config, presenter.clone());
    dispatcher.register_command("a", noop);
    dispatcher.register_command("b", noop);

    let alice = ActorId::new("alice");
    dispatcher.dispatch(&alice, "c", &[]);

    assert_eq!(
        presenter.texts_for(&alice),
        vec!["Unknown command: c. Available commands: a / b"]
    );
}
