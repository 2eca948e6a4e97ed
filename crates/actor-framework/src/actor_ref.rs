//! # Actor References
//!
//! An [`ActorRef`] is the only way to reach an actor. It is cheap to clone, never
//! exposes the actor's state, and stays the same for the whole life of the actor,
//! including across supervisor restarts (the mailbox belongs to the runtime, not to
//! the behaviour object that gets replaced).

use crate::error::FrameworkError;
use crate::message::{ReplyTo, SystemMessage};
use std::fmt;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::debug;

/// Identity of an actor, unique within its [`ActorSystem`](crate::ActorSystem).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A type-safe handle to an actor's mailbox.
///
/// * **Tell** – [`tell`](Self::tell) enqueues and returns immediately. Messages from
///   one sender to one receiver keep their order.
/// * **Ask** – [`ask`](Self::ask) enqueues a request carrying a [`ReplyTo`] and
///   returns a future for the reply, bounded by a deadline.
/// * **Adapters** – [`reply_to`](Self::reply_to) turns this actor into the reply
///   destination of somebody else's request.
pub struct ActorRef<M> {
    id: ActorId,
    path: Arc<str>,
    mailbox: mpsc::UnboundedSender<M>,
    system: mpsc::UnboundedSender<SystemMessage>,
}

impl<M> Clone for ActorRef<M> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            path: self.path.clone(),
            mailbox: self.mailbox.clone(),
            system: self.system.clone(),
        }
    }
}

impl<M: Send + 'static> ActorRef<M> {
    pub(crate) fn new(
        id: ActorId,
        path: Arc<str>,
        mailbox: mpsc::UnboundedSender<M>,
        system: mpsc::UnboundedSender<SystemMessage>,
    ) -> Self {
        Self {
            id,
            path,
            mailbox,
            system,
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn path_arc(&self) -> Arc<str> {
        self.path.clone()
    }

    /// `false` once the actor has stopped.
    pub fn is_alive(&self) -> bool {
        !self.mailbox.is_closed()
    }

    /// Fire-and-forget send.
    ///
    /// Messages sent to a stopped actor are dead letters: they are logged and
    /// dropped, and the caller gets [`FrameworkError::ActorClosed`].
    pub fn tell(&self, msg: M) -> Result<(), FrameworkError> {
        self.mailbox.send(msg).map_err(|_| {
            debug!(actor = %self.path, "Dead letter");
            FrameworkError::ActorClosed
        })
    }

    /// Request/response with a deadline.
    ///
    /// The request is enqueued before this method returns. The returned future
    /// resolves to the reply, or to [`FrameworkError::AskTimeout`] once `timeout`
    /// has elapsed. A request that is lost (the handler crashed, or the actor is
    /// already stopped) is only ever reported as a timeout at the deadline, never
    /// earlier. Replies arriving after the deadline are discarded.
    pub fn ask<R, F>(
        &self,
        make: F,
        timeout: Duration,
    ) -> impl Future<Output = Result<R, FrameworkError>> + Send + 'static
    where
        R: Send + 'static,
        F: FnOnce(ReplyTo<R>) -> M,
    {
        let deadline = Instant::now() + timeout;
        let (port, reply) = oneshot::channel();
        let _ = self.tell(make(ReplyTo::port(port)));

        async move {
            match tokio::time::timeout_at(deadline, reply).await {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(_)) => {
                    tokio::time::sleep_until(deadline).await;
                    Err(FrameworkError::AskTimeout(timeout))
                }
                Err(_) => Err(FrameworkError::AskTimeout(timeout)),
            }
        }
    }

    /// Makes this actor the destination of a reply of type `T`, wrapping the reply
    /// into one of its own messages.
    pub fn reply_to<T, F>(&self, wrap: F) -> ReplyTo<T>
    where
        T: Send + 'static,
        F: FnOnce(T) -> M + Send + 'static,
    {
        let target = self.clone();
        ReplyTo::new(move |value| target.tell(wrap(value)))
    }

    /// Asks the actor to stop after the message it is currently processing.
    pub fn stop(&self) {
        let _ = self.system.send(SystemMessage::Stop);
    }

    pub(crate) fn send_system(&self, msg: SystemMessage) -> Result<(), SystemMessage> {
        self.system.send(msg).map_err(|e| e.0)
    }
}

impl<M> PartialEq for ActorRef<M> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<M> Eq for ActorRef<M> {}

impl<M> Hash for ActorRef<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<M> fmt::Debug for ActorRef<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorRef")
            .field("id", &self.id)
            .field("path", &self.path)
            .finish()
    }
}

impl<M> fmt::Display for ActorRef<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
