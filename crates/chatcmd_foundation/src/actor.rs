//! Actor identifiers.

use std::fmt;
use std::rc::Rc;

/// Identifies the user or session a command is attributed to.
///
/// The dispatcher treats actors as opaque: it only passes them through to
/// matchers and handlers. Cloning is cheap because the name is shared.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId {
    name: Rc<str>,
}

impl ActorId {
    /// Creates an actor identifier from a name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Rc::from(name.as_ref()),
        }
    }

    /// Returns the identifier used for actors that did not name themselves.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::new("")
    }

    /// Returns true if this is the anonymous actor.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// Returns the actor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_anonymous() {
            write!(f, "ActorId(anonymous)")
        } else {
            write!(f, "ActorId({})", self.name)
        }
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_anonymous() {
            write!(f, "<anonymous>")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl From<&str> for ActorId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ActorId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
