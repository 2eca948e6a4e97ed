//! # Actor System
//!
//! The root of an actor hierarchy: hands out actor identities, spawns top-level
//! actors and stops them all on shutdown.

use crate::actor::Actor;
use crate::actor_ref::{ActorId, ActorRef};
use crate::cell::{self, ChildHandle};
use crate::props::Props;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

/// A cloneable handle to a running actor hierarchy.
///
/// Must be used from within a Tokio runtime: every actor is a Tokio task.
#[derive(Clone)]
pub struct ActorSystem {
    inner: Arc<SystemInner>,
}

struct SystemInner {
    name: String,
    next_id: AtomicU64,
    roots: Mutex<Vec<ChildHandle>>,
}

impl ActorSystem {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        info!(system = %name, "Actor system created");
        Self {
            inner: Arc::new(SystemInner {
                name,
                next_id: AtomicU64::new(1),
                roots: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub(crate) fn next_id(&self) -> ActorId {
        ActorId(self.inner.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Spawns a top-level actor at `<system>/<name>`.
    pub fn spawn<A: Actor>(&self, name: &str, props: Props<A>) -> ActorRef<A::Msg> {
        let path = format!("{}/{}", self.inner.name, name);
        let (actor, handle) = cell::launch(self, path, props);
        let mut roots = self.inner.roots.lock().unwrap_or_else(|e| e.into_inner());
        roots.retain(|root| !root.is_finished());
        roots.push(handle);
        actor
    }

    /// Stops every top-level actor (and therefore every descendant) and waits for
    /// all of them to finish.
    pub async fn shutdown(&self) {
        let roots = {
            let mut roots = self.inner.roots.lock().unwrap_or_else(|e| e.into_inner());
            std::mem::take(&mut *roots)
        };
        info!(system = %self.inner.name, actors = roots.len(), "Shutting down");
        for root in &roots {
            root.stop();
        }
        for root in roots {
            root.join().await;
        }
        info!(system = %self.inner.name, "Shutdown complete");
    }
}
