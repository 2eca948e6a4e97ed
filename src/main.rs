//! # Coffeehouse Demo
//!
//! Opens the coffeehouse, lets Johnny and Alina in, gives each of them two caffeine
//! withdrawal warnings, waits for the dust to settle and closes up.

use coffeehouse::config::CoffeehouseConfig;
use coffeehouse::customer::CustomerMessage;
use coffeehouse::lifecycle::{setup_tracing, Coffeehouse};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CoffeehouseConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e.to_string()
    })?;
    let settle = config.ask_timeout * 2;

    let coffeehouse = Coffeehouse::open(config).map_err(|e| e.to_string())?;
    let johnny = coffeehouse.admit("johnny", None);
    let alina = coffeehouse.admit("alina", None);

    for _ in 0..2 {
        for customer in [&johnny, &alina] {
            customer
                .tell(CustomerMessage::CaffeineWithdrawalWarning)
                .map_err(|e| e.to_string())?;
        }
    }

    // Every request is answered, one way or another, within two ask deadlines.
    tokio::time::sleep(settle).await;

    coffeehouse.closing_time();
    tokio::time::sleep(settle).await;
    coffeehouse.shutdown().await;

    info!("Application completed successfully");
    Ok(())
}
