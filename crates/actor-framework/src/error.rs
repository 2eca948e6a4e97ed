//! # Framework Errors
//!
//! This module defines the error types used throughout the actor runtime.
//! Delivery problems surface as [`FrameworkError`]; a behaviour that fails while
//! processing a message is described by an [`ActorFault`], which is what the
//! supervisor hands to [`Actor::post_restart`](crate::Actor::post_restart).

use std::time::Duration;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    /// The target actor has stopped and its mailbox no longer accepts messages.
    #[error("Actor closed")]
    ActorClosed,
    /// No reply arrived before the ask deadline.
    #[error("Ask timed out after {0:?}")]
    AskTimeout(Duration),
    /// The party waiting for a reply is gone (e.g. its ask already timed out).
    #[error("Reply receiver dropped")]
    ReplyDropped,
}

/// Why a behaviour was discarded by its supervisor.
#[derive(Debug, thiserror::Error)]
pub enum ActorFault {
    /// The handler returned an error.
    #[error("{0}")]
    Error(Box<dyn std::error::Error + Send + Sync>),
    /// The handler panicked.
    #[error("panicked: {0}")]
    Panic(String),
}

impl ActorFault {
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let reason = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        ActorFault::Panic(reason)
    }

    /// Returns the handler error, if the fault was one, downcast to `E`.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            ActorFault::Error(e) => e.downcast_ref::<E>(),
            ActorFault::Panic(_) => None,
        }
    }
}
