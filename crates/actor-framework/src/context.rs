//! # Actor Context
//!
//! The [`ActorContext`] is handed to every hook. It is how a behaviour reaches the
//! outside world: its own reference, child actors, watches, and pipes that turn the
//! result of an asynchronous operation back into a message.

use crate::actor::Actor;
use crate::actor_ref::ActorRef;
use crate::cell::{self, ChildHandle};
use crate::message::{Notify, ReplyTo, SystemMessage, Terminated};
use crate::props::Props;
use crate::system::ActorSystem;
use std::future::Future;
use tracing::debug;

/// Per-actor runtime services.
///
/// The context outlives restarts: children spawned through it, and the identity
/// returned by [`myself`](Self::myself), belong to the actor rather than to any one
/// behaviour instance.
pub struct ActorContext<A: Actor> {
    myself: ActorRef<A::Msg>,
    system: ActorSystem,
    children: Vec<ChildHandle>,
    stopping: bool,
}

impl<A: Actor> ActorContext<A> {
    pub(crate) fn new(myself: ActorRef<A::Msg>, system: ActorSystem) -> Self {
        Self {
            myself,
            system,
            children: Vec::new(),
            stopping: false,
        }
    }

    pub fn myself(&self) -> &ActorRef<A::Msg> {
        &self.myself
    }

    pub fn system(&self) -> &ActorSystem {
        &self.system
    }

    /// Spawns a child actor named `name` under this actor's path.
    ///
    /// Children are stopped before their parent finishes stopping, and are stopped
    /// ahead of a parent restart (the restarted behaviour usually spawns them again
    /// from `pre_start`).
    pub fn spawn<B: Actor>(&mut self, name: &str, props: Props<B>) -> ActorRef<B::Msg> {
        self.children.retain(|child| !child.is_finished());
        let path = format!("{}/{}", self.myself.path(), name);
        let (child, handle) = cell::launch(&self.system, path, props);
        self.children.push(handle);
        child
    }

    /// Registers interest in `target` stopping.
    ///
    /// When it stops, `on_terminated` builds the message delivered to this actor.
    /// Watching an actor that has already stopped delivers the notice right away.
    pub fn watch<T, F>(&mut self, target: &ActorRef<T>, on_terminated: F)
    where
        T: Send + 'static,
        F: FnOnce(Terminated) -> A::Msg + Send + 'static,
    {
        let me = self.myself.clone();
        let notify: Notify = Box::new(move |terminated| {
            let _ = me.tell(on_terminated(terminated));
        });
        let watch = SystemMessage::Watch {
            watcher: self.myself.id(),
            notify,
        };
        if let Err(SystemMessage::Watch { notify, .. }) = target.send_system(watch) {
            debug!(actor = %self.myself, target = %target, "Watched actor already stopped");
            notify(Terminated {
                actor: target.id(),
                path: target.path_arc(),
            });
        }
    }

    /// Withdraws a previous [`watch`](Self::watch).
    pub fn unwatch<T: Send + 'static>(&mut self, target: &ActorRef<T>) {
        let _ = target.send_system(SystemMessage::Unwatch {
            watcher: self.myself.id(),
        });
    }

    /// Stops this actor once the current message has been processed.
    pub fn stop(&mut self) {
        self.stopping = true;
    }

    pub(crate) fn is_stopping(&self) -> bool {
        self.stopping
    }

    /// Runs `future` in the background and sends `map(result)` to this actor.
    ///
    /// Nothing is sent when `map` returns `None`. The behaviour keeps processing its
    /// mailbox while the future is pending, and all state changes triggered by the
    /// result happen in the handler for the mapped message.
    pub fn pipe_to_self<T, Fut, F>(&self, future: Fut, map: F)
    where
        T: Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        F: FnOnce(T) -> Option<A::Msg> + Send + 'static,
    {
        let me = self.myself.clone();
        tokio::spawn(async move {
            if let Some(msg) = map(future.await) {
                let _ = me.tell(msg);
            }
        });
    }

    /// Runs `future` in the background and delivers its value to `reply_to`.
    ///
    /// A `None` result delivers nothing, leaving the requester to time out.
    pub fn pipe_to<T, Fut>(&self, future: Fut, reply_to: ReplyTo<T>)
    where
        T: Send + 'static,
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        let path = self.myself.path_arc();
        tokio::spawn(async move {
            if let Some(value) = future.await {
                if let Err(e) = reply_to.send(value) {
                    debug!(actor = %path, error = %e, "Piped reply undeliverable");
                }
            }
        });
    }

    pub(crate) async fn stop_children(&mut self) {
        for child in &self.children {
            child.stop();
        }
        for child in self.children.drain(..) {
            child.join().await;
        }
    }
}
