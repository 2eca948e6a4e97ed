//! # Runtime Messages
//!
//! User messages are plain enums chosen by each actor (`Actor::Msg`). This module
//! holds what the runtime itself moves around: the reply destination carried inside
//! request messages, the `Terminated` notice sent to watchers, and the system
//! messages that control an actor's lifecycle.

use crate::actor_ref::ActorId;
use crate::error::FrameworkError;
use std::fmt;
use std::sync::Arc;
use tokio::sync::oneshot;

type Deliver<T> = Box<dyn FnOnce(T) -> Result<(), FrameworkError> + Send>;

/// A single-use destination for a reply.
///
/// Requests carry a `ReplyTo` instead of a sender identity, so the compiler knows
/// which reply type the requester expects. The destination is either the port of a
/// pending [`ask`](crate::ActorRef::ask) or another actor's mailbox reached through an
/// adapter (see [`ActorRef::reply_to`](crate::ActorRef::reply_to)).
///
/// Dropping a `ReplyTo` without sending is allowed; the requester only ever observes
/// the absence of a reply.
pub struct ReplyTo<T> {
    deliver: Deliver<T>,
}

impl<T: Send + 'static> ReplyTo<T> {
    /// Builds a reply destination from an arbitrary delivery function.
    pub fn new(deliver: impl FnOnce(T) -> Result<(), FrameworkError> + Send + 'static) -> Self {
        Self {
            deliver: Box::new(deliver),
        }
    }

    pub(crate) fn port(port: oneshot::Sender<T>) -> Self {
        Self::new(move |value| port.send(value).map_err(|_| FrameworkError::ReplyDropped))
    }

    /// Delivers the reply, consuming the destination.
    pub fn send(self, value: T) -> Result<(), FrameworkError> {
        (self.deliver)(value)
    }
}

impl<T> fmt::Debug for ReplyTo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReplyTo")
    }
}

/// Notice delivered to every watcher once the watched actor has stopped,
/// whether by an explicit stop or because its initialisation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminated {
    pub actor: ActorId,
    pub path: Arc<str>,
}

pub(crate) type Notify = Box<dyn FnOnce(Terminated) + Send>;

/// Lifecycle control, processed ahead of any user message.
pub(crate) enum SystemMessage {
    Stop,
    Watch { watcher: ActorId, notify: Notify },
    Unwatch { watcher: ActorId },
}

impl fmt::Debug for SystemMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemMessage::Stop => f.write_str("Stop"),
            SystemMessage::Watch { watcher, .. } => write!(f, "Watch({watcher})"),
            SystemMessage::Unwatch { watcher } => write!(f, "Unwatch({watcher})"),
        }
    }
}
