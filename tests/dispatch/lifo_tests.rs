//! LIFO resolution tests.
//!
//! The newest accepting entry runs, and only that one.

use std::cell::RefCell;
use std::rc::Rc;

use chatcmd_dispatch::matcher;
use chatcmd_dispatch::{DispatchOutcome, Dispatcher, Invocation};
use chatcmd_foundation::ActorId;
use proptest::prelude::*;

type Log = Rc<RefCell<Vec<usize>>>;

/// Registers entry `id` that accepts `command` and logs its id when run.
fn register_logged(dispatcher: &Dispatcher, id: usize, command: &str, log: &Log) {
    let log = Rc::clone(log);
    let command = command.to_string();
    dispatcher.register(
        move |inv: &Invocation<'_>| inv.command == command,
        move |_: &Dispatcher, _: &Invocation<'_>| log.borrow_mut().push(id),
        None,
    );
}

#[test]
fn newer_entry_shadows_older() {
    let dispatcher = Dispatcher::new();
    let log = Log::default();
    register_logged(&dispatcher, 1, "go", &log);
    register_logged(&dispatcher, 2, "go", &log);

    dispatcher.dispatch(&ActorId::new("alice"), "go", &[]);

    assert_eq!(*log.borrow(), vec![2]);
}

#[test]
fn non_matching_newer_entries_are_skipped() {
    let dispatcher = Dispatcher::new();
    let log = Log::default();
    register_logged(&dispatcher, 1, "go", &log);
    register_logged(&dispatcher, 2, "stop", &log);
    register_logged(&dispatcher, 3, "wait", &log);

    let outcome = dispatcher.dispatch(&ActorId::new("alice"), "go", &[]);

    assert_eq!(
        outcome,
        DispatchOutcome::Handled {
            position: 0,
            label: None
        }
    );
    assert_eq!(*log.borrow(), vec![1]);
}

#[test]
fn matcher_can_inspect_actor() {
    let dispatcher = Dispatcher::new();
    let log = Log::default();
    register_logged(&dispatcher, 1, "kick", &log);

    let admin_log = Rc::clone(&log);
    dispatcher.register(
        |inv: &Invocation<'_>| inv.command == "kick" && inv.actor.name() == "admin",
        move |_: &Dispatcher, _: &Invocation<'_>| admin_log.borrow_mut().push(2),
        Some("kick"),
    );

    dispatcher.dispatch(&ActorId::new("guest"), "kick", &[]);
    dispatcher.dispatch(&ActorId::new("admin"), "kick", &[]);

    assert_eq!(*log.borrow(), vec![1, 2]);
}

#[test]
fn matcher_with_arity_rejects_short_args() {
    let dispatcher = Dispatcher::new();
    let log = Log::default();

    let log2 = Rc::clone(&log);
    dispatcher.register(
        matcher::with_args("give", 2),
        move |_: &Dispatcher, _: &Invocation<'_>| log2.borrow_mut().push(2),
        Some("give"),
    );

    let alice = ActorId::new("alice");
    let outcome = dispatcher.dispatch(&alice, "give", &["sword".to_string()]);
    assert_eq!(outcome, DispatchOutcome::Unhandled);

    dispatcher.dispatch(&alice, "give", &["sword".to_string(), "bob".to_string()]);
    assert_eq!(*log.borrow(), vec![2]);
}

proptest! {
    /// For any registrations, at most one handler runs and it is the
    /// newest entry whose matcher accepts.
    #[test]
    fn newest_accepting_entry_runs(
        commands in proptest::collection::vec(0u8..4, 0..20),
        probe in 0u8..5,
    ) {
        let dispatcher = Dispatcher::new();
        let log = Log::default();
        for (id, command) in commands.iter().enumerate() {
            register_logged(&dispatcher, id, &format!("c{command}"), &log);
        }

        let outcome = dispatcher.dispatch(&ActorId::new("p"), &format!("c{probe}"), &[]);

        let expected = commands.iter().rposition(|c| *c == probe);
        match expected {
            Some(id) => {
                prop_assert_eq!(log.borrow().clone(), vec![id]);
                prop_assert_eq!(outcome, DispatchOutcome::Handled { position: id, label: None });
            }
            None => {
                prop_assert!(log.borrow().is_empty());
                prop_assert_eq!(outcome, DispatchOutcome::Unhandled);
            }
        }
    }
}
