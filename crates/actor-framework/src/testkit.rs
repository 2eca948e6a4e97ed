//! # Test Probes & Testing Guide
//!
//! A [`TestProbe<M>`] is an [`ActorRef<M>`] with no behaviour behind it: whatever is
//! sent to it lands in the test, which can then assert on it. Use it wherever an
//! actor under test talks to a collaborator you do not want to run for real.
//!
//! ## When to use Probes vs Real Actors
//!
//! | Feature | TestProbe | Real Actor |
//! |---------|-----------|------------|
//! | **Replies** | Scripted by the test (or withheld) | Whatever the actor does |
//! | **Timeouts** | Easy: just never reply | Hard (requires a failing dependency) |
//! | **Termination** | [`TestProbe::stop`] on demand | Needs a stop message |
//! | **Use Case** | Testing one actor's protocol | Full pipeline scenarios |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorSystem, ReplyTo};
//! use std::time::Duration;
//!
//! #[derive(Debug)]
//! enum PingMsg { Ping(ReplyTo<&'static str>) }
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = ActorSystem::new("test");
//!     let mut probe = system.probe::<PingMsg>("pinger");
//!
//!     let pong = probe.actor_ref().ask(PingMsg::Ping, Duration::from_secs(1));
//!
//!     let PingMsg::Ping(reply_to) = probe.expect_msg(Duration::from_secs(1)).await;
//!     reply_to.send("pong").unwrap();
//!
//!     assert_eq!(pong.await.unwrap(), "pong");
//! }
//! ```

use crate::actor_ref::ActorRef;
use crate::message::{SystemMessage, Terminated};
use crate::system::ActorSystem;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// A stand-in actor whose mailbox is read by the test.
pub struct TestProbe<M> {
    actor: ActorRef<M>,
    mailbox: mpsc::UnboundedReceiver<M>,
    system_rx: mpsc::UnboundedReceiver<SystemMessage>,
}

impl ActorSystem {
    /// Creates a probe at `<system>/<name>`.
    pub fn probe<M: Send + 'static>(&self, name: &str) -> TestProbe<M> {
        let (mailbox_tx, mailbox) = mpsc::unbounded_channel();
        let (system_tx, system_rx) = mpsc::unbounded_channel();
        let path: Arc<str> = Arc::from(format!("{}/{}", self.name(), name));
        TestProbe {
            actor: ActorRef::new(self.next_id(), path, mailbox_tx, system_tx),
            mailbox,
            system_rx,
        }
    }
}

impl<M: Debug + Send + 'static> TestProbe<M> {
    pub fn actor_ref(&self) -> ActorRef<M> {
        self.actor.clone()
    }

    /// Waits for the next message, panicking if none arrives `within`.
    pub async fn expect_msg(&mut self, within: Duration) -> M {
        match tokio::time::timeout(within, self.mailbox.recv()).await {
            Ok(Some(msg)) => msg,
            Ok(None) => panic!("probe {} closed while waiting for a message", self.actor),
            Err(_) => panic!("probe {} received no message within {within:?}", self.actor),
        }
    }

    /// Panics if any message arrives `within`.
    pub async fn expect_no_msg(&mut self, within: Duration) {
        if let Ok(Some(msg)) = tokio::time::timeout(within, self.mailbox.recv()).await {
            panic!("probe {} received unexpected message {msg:?}", self.actor);
        }
    }

    /// Stops the probe as if it were an actor: later sends become dead letters and
    /// everyone watching it receives [`Terminated`].
    pub fn stop(mut self) {
        self.mailbox.close();
        self.system_rx.close();
        let terminated = Terminated {
            actor: self.actor.id(),
            path: self.actor.path_arc(),
        };
        let mut watchers = Vec::new();
        while let Ok(sys) = self.system_rx.try_recv() {
            match sys {
                SystemMessage::Watch { watcher, notify } => watchers.push((watcher, notify)),
                SystemMessage::Unwatch { watcher } => watchers.retain(|(id, _)| *id != watcher),
                SystemMessage::Stop => {}
            }
        }
        for (_, notify) in watchers {
            notify(terminated.clone());
        }
    }
}
