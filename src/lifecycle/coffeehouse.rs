use crate::barista::{self, BaristaMessage};
use crate::config::{CoffeehouseConfig, ConfigError};
use crate::customer::{self, CustomerEvent, CustomerMessage};
use actor_framework::{ActorRef, ActorSystem};
use tracing::info;

/// The running coffeehouse: one actor system, one barista, any number of customers.
///
/// # Example
///
/// ```rust
/// use coffeehouse::config::CoffeehouseConfig;
/// use coffeehouse::customer::CustomerMessage;
/// use coffeehouse::lifecycle::Coffeehouse;
///
/// #[tokio::main]
/// async fn main() {
///     let coffeehouse = Coffeehouse::open(CoffeehouseConfig::default()).unwrap();
///     let johnny = coffeehouse.admit("johnny", None);
///     johnny.tell(CustomerMessage::CaffeineWithdrawalWarning).unwrap();
///
///     coffeehouse.closing_time();
///     coffeehouse.shutdown().await;
/// }
/// ```
pub struct Coffeehouse {
    system: ActorSystem,
    barista: ActorRef<BaristaMessage>,
    config: CoffeehouseConfig,
}

impl Coffeehouse {
    /// Validates `config`, then starts the actor system and the barista (which
    /// brings up the register and the printer).
    pub fn open(config: CoffeehouseConfig) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let system = ActorSystem::new("coffeehouse");
        let barista = system.spawn("barista", barista::props(config.clone()));
        info!(
            ask_timeout = ?config.ask_timeout,
            jam_probability = config.jam_probability,
            "Coffeehouse open"
        );
        Ok(Self {
            system,
            barista,
            config,
        })
    }

    /// Lets a customer in. The customer watches the barista from the start.
    pub fn admit(
        &self,
        name: &str,
        observer: Option<ActorRef<CustomerEvent>>,
    ) -> ActorRef<CustomerMessage> {
        self.system
            .spawn(name, customer::props(self.barista.clone(), observer))
    }

    pub fn barista(&self) -> &ActorRef<BaristaMessage> {
        &self.barista
    }

    pub fn system(&self) -> &ActorSystem {
        &self.system
    }

    pub fn config(&self) -> &CoffeehouseConfig {
        &self.config
    }

    /// Tells the barista to close. Requests still in flight are not drained.
    pub fn closing_time(&self) {
        let _ = self.barista.tell(BaristaMessage::ClosingTime);
    }

    /// Stops every actor that is still running and waits for them.
    pub async fn shutdown(self) {
        self.system.shutdown().await;
        info!("Coffeehouse closed");
    }
}
