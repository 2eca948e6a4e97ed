//! # Actor Framework
//!
//! This crate provides a small, typed actor runtime on top of Tokio: isolated units of
//! sequential state that talk only by message, ask each other for replies with a
//! deadline, fail independently, and are restarted by their supervisor without losing
//! their identity.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Behaviour Layer** ([`Actor`]) - Your message handlers and lifecycle hooks
//! 2. **Runtime Layer** (the cell, [`ActorContext`], [`ActorSystem`]) - Mailboxes,
//!    sequential processing, supervision, watches
//! 3. **Interface Layer** ([`ActorRef`], [`ReplyTo`]) - Type-safe tell / ask
//!
//! ## Supervision
//!
//! A handler that returns `Err` or panics is a *fault*. The runtime drops the
//! message being processed, stops the actor's children, builds a fresh behaviour
//! from the [`Props`] factory, runs [`Actor::post_restart`] and carries on with the
//! next message. The [`ActorRef`] and the mailbox are untouched, and so is the
//! actor's persistent [`Actor::State`]; only the behaviour object is replaced.
//!
//! There is one policy: always restart. An actor only stops when asked to, or when
//! its behaviour cannot even be initialised.
//!
//! ## Ask, Pipe, Timeout
//!
//! [`ActorRef::ask`] never blocks an actor: an actor that needs a reply hands the
//! returned future to [`ActorContext::pipe_to_self`] (continue in a later message)
//! or [`ActorContext::pipe_to`] (forward to whoever asked). The only failure an ask
//! reports is a timeout at its deadline; a lost request is never reported early.
//!
//! ```rust
//! use actor_framework::{Actor, ActorContext, ActorSystem, Props, ReplyTo};
//! use async_trait::async_trait;
//! use std::time::Duration;
//!
//! struct Counter;
//!
//! #[derive(Debug)]
//! enum CounterMsg {
//!     Add(u64),
//!     Total(ReplyTo<u64>),
//! }
//!
//! #[async_trait]
//! impl Actor for Counter {
//!     type Msg = CounterMsg;
//!     type State = u64;
//!     type Error = std::convert::Infallible;
//!
//!     async fn handle(
//!         &mut self,
//!         _ctx: &mut ActorContext<Self>,
//!         total: &mut u64,
//!         msg: CounterMsg,
//!     ) -> Result<(), Self::Error> {
//!         match msg {
//!             CounterMsg::Add(n) => *total += n,
//!             CounterMsg::Total(reply_to) => {
//!                 let _ = reply_to.send(*total);
//!             }
//!         }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = ActorSystem::new("example");
//!     let counter = system.spawn("counter", Props::new(|| Counter));
//!
//!     counter.tell(CounterMsg::Add(2)).unwrap();
//!     counter.tell(CounterMsg::Add(3)).unwrap();
//!     let total = counter
//!         .ask(CounterMsg::Total, Duration::from_secs(1))
//!         .await
//!         .unwrap();
//!     assert_eq!(total, 5);
//!
//!     system.shutdown().await;
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel**
//! - Messages from one sender to one receiver keep their order; nothing else is ordered
//!
//! ## Testing
//!
//! See the [`testkit`] module for [`TestProbe`], a stand-in actor driven by the test.

pub mod actor;
pub mod actor_ref;
mod cell;
pub mod context;
pub mod error;
pub mod message;
pub mod props;
pub mod system;
pub mod testkit;

// Re-export core types for convenience
pub use actor::Actor;
pub use actor_ref::{ActorId, ActorRef};
pub use context::ActorContext;
pub use error::{ActorFault, FrameworkError};
pub use message::{ReplyTo, Terminated};
pub use props::Props;
pub use system::ActorSystem;
pub use testkit::TestProbe;
