//! # Actor Cell
//!
//! The cell is the runtime half of an actor: it owns the mailbox receiver, the
//! persistent state slot and the watcher list, and drives the behaviour one message
//! at a time. It also acts as the actor's supervisor, with a single policy: a failed
//! behaviour is always replaced.
//!
//! **Concurrency Model**:
//! Every cell runs in its own Tokio task and processes its mailbox sequentially, so
//! the behaviour and its state are never touched by two messages at once. Many cells
//! run in parallel with each other.

use crate::actor::Actor;
use crate::actor_ref::{ActorId, ActorRef};
use crate::context::ActorContext;
use crate::error::ActorFault;
use crate::message::{Notify, SystemMessage, Terminated};
use crate::props::{Factory, Props};
use crate::system::ActorSystem;
use futures_util::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Owner-side handle used to stop an actor and wait for it to finish.
pub(crate) struct ChildHandle {
    stop: Box<dyn Fn() + Send + Sync>,
    join: JoinHandle<()>,
}

impl ChildHandle {
    pub(crate) fn stop(&self) {
        (self.stop)()
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    pub(crate) async fn join(self) {
        if let Err(e) = self.join.await {
            warn!(error = %e, "Actor task did not finish cleanly");
        }
    }
}

/// Creates the mailbox and the cell for a new actor at `path` and starts its task.
pub(crate) fn launch<A: Actor>(
    system: &ActorSystem,
    path: String,
    props: Props<A>,
) -> (ActorRef<A::Msg>, ChildHandle) {
    let (mailbox_tx, mailbox) = mpsc::unbounded_channel();
    let (system_tx, system_rx) = mpsc::unbounded_channel();
    let myself = ActorRef::new(system.next_id(), Arc::from(path), mailbox_tx, system_tx);

    let cell = ActorCell {
        factory: props.factory,
        state: props.state,
        mailbox,
        system_rx,
        watchers: Vec::new(),
        ctx: ActorContext::new(myself.clone(), system.clone()),
        restarts: 0,
    };
    let join = tokio::spawn(cell.run());

    let stopper = myself.clone();
    let handle = ChildHandle {
        stop: Box::new(move || stopper.stop()),
        join,
    };
    (myself, handle)
}

enum Event<M> {
    System(SystemMessage),
    Message(M),
    Closed,
}

struct ActorCell<A: Actor> {
    factory: Factory<A>,
    state: A::State,
    mailbox: mpsc::UnboundedReceiver<A::Msg>,
    system_rx: mpsc::UnboundedReceiver<SystemMessage>,
    watchers: Vec<(ActorId, Notify)>,
    ctx: ActorContext<A>,
    restarts: u32,
}

impl<A: Actor> ActorCell<A> {
    async fn run(mut self) {
        let path = self.ctx.myself().path_arc();
        let mut behavior = (self.factory)();

        match guarded(behavior.pre_start(&mut self.ctx, &mut self.state)).await {
            Ok(()) => {
                info!(actor = %path, "Actor started");
                self.process(&mut behavior).await;
                let stopped = AssertUnwindSafe(behavior.post_stop(&mut self.ctx, &mut self.state))
                    .catch_unwind()
                    .await;
                if stopped.is_err() {
                    warn!(actor = %path, "post_stop panicked");
                }
            }
            Err(fault) => error!(actor = %path, error = %fault, "Actor failed to start"),
        }

        self.finish().await;
    }

    async fn process(&mut self, behavior: &mut A) {
        let path = self.ctx.myself().path_arc();
        loop {
            if self.ctx.is_stopping() {
                debug!(actor = %path, "Stopping itself");
                return;
            }

            let event = tokio::select! {
                biased;
                Some(sys) = self.system_rx.recv() => Event::System(sys),
                Some(msg) = self.mailbox.recv() => Event::Message(msg),
                else => Event::Closed,
            };

            match event {
                Event::System(SystemMessage::Stop) => {
                    debug!(actor = %path, "Stop requested");
                    return;
                }
                Event::System(SystemMessage::Watch { watcher, notify }) => {
                    self.watchers.retain(|(id, _)| *id != watcher);
                    self.watchers.push((watcher, notify));
                }
                Event::System(SystemMessage::Unwatch { watcher }) => {
                    self.watchers.retain(|(id, _)| *id != watcher);
                }
                Event::Message(msg) => {
                    debug!(actor = %path, ?msg, "Received");
                    let handled =
                        guarded(behavior.handle(&mut self.ctx, &mut self.state, msg)).await;
                    if let Err(fault) = handled {
                        if !self.restart(behavior, fault).await {
                            return;
                        }
                    }
                }
                Event::Closed => return,
            }
        }
    }

    /// Replaces a failed behaviour. Returns `false` if the replacement could not be
    /// initialised, in which case the actor stops.
    async fn restart(&mut self, behavior: &mut A, fault: ActorFault) -> bool {
        let path = self.ctx.myself().path_arc();
        self.restarts += 1;
        warn!(actor = %path, error = %fault, restarts = self.restarts, "Actor failed, restarting");

        self.ctx.stop_children().await;
        *behavior = (self.factory)();

        match guarded(behavior.post_restart(&mut self.ctx, &mut self.state, &fault)).await {
            Ok(()) => {
                info!(actor = %path, "Actor restarted");
                true
            }
            Err(e) => {
                error!(actor = %path, error = %e, "Actor failed to restart");
                false
            }
        }
    }

    async fn finish(mut self) {
        let myself = self.ctx.myself().clone();
        self.ctx.stop_children().await;

        self.mailbox.close();
        let mut dropped = 0usize;
        while self.mailbox.try_recv().is_ok() {
            dropped += 1;
        }

        self.system_rx.close();
        while let Ok(sys) = self.system_rx.try_recv() {
            match sys {
                SystemMessage::Watch { watcher, notify } => {
                    self.watchers.retain(|(id, _)| *id != watcher);
                    self.watchers.push((watcher, notify));
                }
                SystemMessage::Unwatch { watcher } => {
                    self.watchers.retain(|(id, _)| *id != watcher);
                }
                SystemMessage::Stop => {}
            }
        }

        let terminated = Terminated {
            actor: myself.id(),
            path: myself.path_arc(),
        };
        let watchers = self.watchers.len();
        for (_, notify) in self.watchers.drain(..) {
            notify(terminated.clone());
        }

        info!(actor = %myself, restarts = self.restarts, dropped, watchers, "Actor stopped");
    }
}

/// Turns handler errors and panics alike into an [`ActorFault`].
async fn guarded<E, Fut>(future: Fut) -> Result<(), ActorFault>
where
    E: std::error::Error + Send + Sync + 'static,
    Fut: Future<Output = Result<(), E>>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(ActorFault::Error(Box::new(e))),
        Err(panic) => Err(ActorFault::from_panic(panic)),
    }
}
