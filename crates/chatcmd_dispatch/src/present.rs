//! Presentation collaborator.
//!
//! Handlers show text to actors through a [`Presenter`]. The dispatcher
//! itself never renders anything; only the fallback and user handlers do.

use std::cell::RefCell;
use std::time::Duration;

use chatcmd_foundation::ActorId;

/// Displays text to actors.
pub trait Presenter {
    /// Sends plain text to an actor.
    fn send(&self, actor: &ActorId, text: &str);

    /// Sends text that should stay visible for `duration`.
    ///
    /// Presenters without timed display fall back to [`Presenter::send`].
    fn send_timed(&self, actor: &ActorId, text: &str, duration: Duration) {
        let _ = duration;
        self.send(actor, text);
    }

    /// Clears whatever is currently shown to an actor.
    fn clear(&self, actor: &ActorId) {
        let _ = actor;
    }
}

/// A message delivered through a [`RecordingPresenter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Recipient.
    pub actor: ActorId,
    /// Message text.
    pub text: String,
    /// How long the message should stay visible, if timed.
    pub display_for: Option<Duration>,
}

/// Presenter that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    messages: RefCell<Vec<Message>>,
    cleared: RefCell<Vec<ActorId>>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages delivered so far.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }

    /// Takes the messages, leaving an empty list.
    pub fn take_messages(&self) -> Vec<Message> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }

    /// Texts delivered to one actor, in order.
    #[must_use]
    pub fn texts_for(&self, actor: &ActorId) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|m| &m.actor == actor)
            .map(|m| m.text.clone())
            .collect()
    }

    /// Actors whose display was cleared, in order.
    #[must_use]
    pub fn cleared(&self) -> Vec<ActorId> {
        self.cleared.borrow().clone()
    }

    fn record(&self, actor: &ActorId, text: &str, display_for: Option<Duration>) {
        self.messages.borrow_mut().push(Message {
            actor: actor.clone(),
            text: text.to_string(),
            display_for,
        });
    }
}

impl Presenter for RecordingPresenter {
    fn send(&self, actor: &ActorId, text: &str) {
        self.record(actor, text, None);
    }

    fn send_timed(&self, actor: &ActorId, text: &str, duration: Duration) {
        self.record(actor, text, Some(duration));
    }

    fn clear(&self, actor: &ActorId) {
        self.cleared.borrow_mut().push(actor.clone());
    }
}
