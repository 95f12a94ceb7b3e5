//! Re-entrant dispatch tests.
//!
//! Handlers may dispatch again and may register new entries; each call
//! scans the registry as it stood when that call began.

use std::cell::RefCell;
use std::rc::Rc;

use chatcmd_dispatch::matcher;
use chatcmd_dispatch::{DispatchConfig, Dispatcher, Invocation, RecordingPresenter};
use chatcmd_foundation::ActorId;

type Log = Rc<RefCell<Vec<String>>>;

fn logging_command(dispatcher: &Dispatcher, name: &'static str, log: &Log) {
    let log = Rc::clone(log);
    dispatcher.register_command(name, move |_: &Dispatcher, _: &Invocation<'_>| {
        log.borrow_mut().push(name.to_string());
    });
}

fn install_fan_out(dispatcher: &Dispatcher) {
    dispatcher.register(
        matcher::prefixed("!"),
        |d: &Dispatcher, inv: &Invocation<'_>| {
            for ch in inv.command.chars().skip(1) {
                d.dispatch(inv.actor, &ch.to_string(), &[]);
            }
        },
        None,
    );
}

#[test]
fn fan_out_runs_each_character_in_order() {
    let dispatcher = Dispatcher::new();
    let log = Log::default();
    logging_command(&dispatcher, "a", &log);
    logging_command(&dispatcher, "b", &log);
    install_fan_out(&dispatcher);

    dispatcher.parse(&ActorId::new("alice"), "-!ab");

    assert_eq!(*log.borrow(), vec!["a", "b"]);
}

#[test]
fn fan_out_unknown_characters_reach_fallback() {
    let presenter = Rc::new(RecordingPresenter::new());
    let dispatcher = Dispatcher::with_config(&DispatchConfig::default(), presenter.clone());
    let log = Log::default();
    logging_command(&dispatcher, "a", &log);
    install_fan_out(&dispatcher);

    let alice = ActorId::new("alice");
    dispatcher.parse(&alice, "-!xa");

    assert_eq!(*log.borrow(), vec!["a"]);
    assert_eq!(
        presenter.texts_for(&alice),
        vec!["Unknown command: x. Available commands: a"]
    );
}

#[test]
fn bare_bang_is_not_fan_out() {
    let presenter = Rc::new(RecordingPresenter::new());
    let dispatcher = Dispatcher::with_config(&DispatchConfig::default(), presenter.clone());
    install_fan_out(&dispatcher);

    let alice = ActorId::new("alice");
    dispatcher.parse(&alice, "-!");

    assert_eq!(
        presenter.texts_for(&alice),
        vec!["Unknown command: !. No commands are available."]
    );
}

#[test]
fn nested_call_sees_entries_registered_by_outer_handler() {
    let dispatcher = Dispatcher::new();
    let log = Log::default();

    let outer_log = Rc::clone(&log);
    dispatcher.register_command("setup", move |d: &Dispatcher, inv: &Invocation<'_>| {
        let inner_log = Rc::clone(&outer_log);
        d.register_command("ready", move |_: &Dispatcher, _: &Invocation<'_>| {
            inner_log.borrow_mut().push("ready".to_string());
        });
        d.dispatch(inv.actor, "ready", &[]);
    });

    dispatcher.dispatch(&ActorId::new("alice"), "setup", &[]);

    assert_eq!(*log.borrow(), vec!["ready"]);
    assert_eq!(dispatcher.registry().labels(), vec!["setup", "ready"]);
}

#[test]
fn outer_scan_ignores_entries_registered_during_it() {
    let dispatcher = Dispatcher::new();
    let log = Log::default();

    let any_log = Rc::clone(&log);
    dispatcher.register(
        matcher::any(),
        move |_: &Dispatcher, inv: &Invocation<'_>| {
            any_log.borrow_mut().push(format!("any:{}", inv.command));
        },
        None,
    );

    // Registers a handler for its own command, then returns; the current
    // call has already been resolved to this entry.
    let shadow_log = Rc::clone(&log);
    dispatcher.register_command("grow", move |d: &Dispatcher, _: &Invocation<'_>| {
        let shadow_log = Rc::clone(&shadow_log);
        d.register_command("grow", move |_: &Dispatcher, _: &Invocation<'_>| {
            shadow_log.borrow_mut().push("shadow".to_string());
        });
    });

    let alice = ActorId::new("alice");
    dispatcher.dispatch(&alice, "grow", &[]);
    dispatcher.dispatch(&alice, "grow", &[]);

    assert_eq!(*log.borrow(), vec!["shadow"]);
    assert_eq!(dispatcher.registry().len(), 3);
}

#[test]
fn snapshot_is_unaffected_by_later_registration() {
    let dispatcher = Dispatcher::new();
    dispatcher.register_command("a", |_: &Dispatcher, _: &Invocation<'_>| {});

    let snapshot = dispatcher.snapshot();
    dispatcher.register_command("b", |_: &Dispatcher, _: &Invocation<'_>| {});

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.labels().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(dispatcher.snapshot().len(), 2);
}

#[test]
fn depth_returns_to_zero_after_nested_calls() {
    let dispatcher = Dispatcher::new();
    let log = Log::default();
    logging_command(&dispatcher, "a", &log);
    install_fan_out(&dispatcher);

    dispatcher.parse(&ActorId::new("alice"), "-!aaa");

    assert_eq!(log.borrow().len(), 3);
    assert_eq!(dispatcher.depth(), 0);
}
