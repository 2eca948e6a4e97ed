//! # Actor Trait
//!
//! The `Actor` trait is the contract every behaviour implements to be run by the
//! runtime. It names the actor's message enum, the state the runtime keeps for it
//! across restarts, and its error type, and provides the lifecycle hooks.
//!
//! # Behaviour vs. Persistent State
//!
//! The value implementing `Actor` is the *behaviour*. It is built by the factory in
//! [`Props`](crate::Props) and is thrown away whenever a handler fails; the
//! supervisor builds a fresh one and carries on with the next message.
//!
//! `State` is the *persistent slot*. It is created once at spawn time, owned by the
//! runtime, and handed to every hook by `&mut`. Anything that must survive a restart
//! of the same logical actor lives here; anything that should be cleared by a
//! restart lives in the behaviour.
//!
//! # Provided Methods (Hooks)
//! - [`Actor::pre_start`] – runs before the first message.
//! - [`Actor::post_restart`] – runs on the fresh behaviour after a fault. Defaults
//!   to `pre_start`.
//! - [`Actor::post_stop`] – runs once the actor is stopping.
//!
//! Only [`Actor::handle`] must be implemented.

use crate::context::ActorContext;
use crate::error::ActorFault;
use async_trait::async_trait;
use std::fmt::Debug;

/// A unit of sequential state reachable only by message.
///
/// The runtime calls `handle` for one message at a time, so neither the behaviour
/// nor `State` needs any locking.
#[async_trait]
pub trait Actor: Sized + Send + 'static {
    /// The closed set of messages this actor accepts.
    type Msg: Debug + Send + 'static;

    /// State that survives supervisor restarts. Use `()` if there is none.
    type State: Send + 'static;

    /// The error a handler may fail with. Any error is a fault: the message is
    /// dropped and the behaviour is restarted.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the first message is processed.
    async fn pre_start(
        &mut self,
        _ctx: &mut ActorContext<Self>,
        _state: &mut Self::State,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Process one message.
    async fn handle(
        &mut self,
        ctx: &mut ActorContext<Self>,
        state: &mut Self::State,
        msg: Self::Msg,
    ) -> Result<(), Self::Error>;

    /// Called on the freshly built behaviour after the previous one failed.
    async fn post_restart(
        &mut self,
        ctx: &mut ActorContext<Self>,
        state: &mut Self::State,
        _cause: &ActorFault,
    ) -> Result<(), Self::Error> {
        self.pre_start(ctx, state).await
    }

    /// Called once when the actor stops, before its watchers are notified.
    async fn post_stop(&mut self, _ctx: &mut ActorContext<Self>, _state: &mut Self::State) {}
}
