//! # Props
//!
//! Everything the runtime needs to start, and later restart, an actor.

use crate::actor::Actor;
use std::sync::Arc;

pub(crate) type Factory<A> = Arc<dyn Fn() -> A + Send + Sync>;

/// Behaviour factory plus the initial value of the persistent slot.
///
/// The factory is called once at spawn time and again after every fault, so it
/// must capture whatever configuration the behaviour needs by value.
///
/// ```rust
/// use actor_framework::{Actor, ActorContext, Props};
/// use async_trait::async_trait;
///
/// struct Counter;
///
/// #[derive(Debug)]
/// enum CounterMsg { Add(u64) }
///
/// #[async_trait]
/// impl Actor for Counter {
///     type Msg = CounterMsg;
///     type State = u64;
///     type Error = std::convert::Infallible;
///
///     async fn handle(&mut self, _: &mut ActorContext<Self>, total: &mut u64, msg: CounterMsg) -> Result<(), Self::Error> {
///         match msg { CounterMsg::Add(n) => *total += n }
///         Ok(())
///     }
/// }
///
/// let props = Props::new(|| Counter).with_state(10);
/// ```
pub struct Props<A: Actor> {
    pub(crate) factory: Factory<A>,
    pub(crate) state: A::State,
}

impl<A: Actor> Props<A>
where
    A::State: Default,
{
    pub fn new(factory: impl Fn() -> A + Send + Sync + 'static) -> Self {
        Self {
            factory: Arc::new(factory),
            state: A::State::default(),
        }
    }
}

impl<A: Actor> Props<A> {
    /// Props whose persistent slot starts at `state`.
    pub fn with_factory_and_state(
        factory: impl Fn() -> A + Send + Sync + 'static,
        state: A::State,
    ) -> Self {
        Self {
            factory: Arc::new(factory),
            state,
        }
    }

    /// Replaces the initial value of the persistent slot.
    pub fn with_state(mut self, state: A::State) -> Self {
        self.state = state;
        self
    }
}
