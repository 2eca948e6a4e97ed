//! # Receipt Printer Actor
//!
//! The lowest actor in the chain: a device that prints receipts and, every so often,
//! jams.
//!
//! ## Failure Model
//!
//! Each print job draws a fresh random outcome; with the configured probability the
//! paper jams. A jammed printer fails every job it is given ([`PrinterError::PaperJam`])
//! until its supervisor restarts it, which clears the jam. Nobody downstream ever
//! sees the jam itself, only a receipt that never arrives.
//!
//! The random source lives in the actor's persistent slot, so a seeded printer
//! keeps advancing through its sequence across restarts instead of replaying it.
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::ActorSystem;
//! use coffeehouse::model::PrintJob;
//! use coffeehouse::printer::{self, PrinterMessage};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = ActorSystem::new("docs");
//!     let printer = system.spawn("printer", printer::props(0.0, Some(7)));
//!
//!     let receipt = printer
//!         .ask(
//!             |reply_to| PrinterMessage::Print { job: PrintJob { price: 150 }, reply_to },
//!             Duration::from_secs(1),
//!         )
//!         .await
//!         .unwrap();
//!     assert_eq!(receipt.price, 150);
//!     system.shutdown().await;
//! }
//! ```

pub mod error;

pub use error::*;

use crate::model::{PrintJob, Receipt};
use actor_framework::{Actor, ActorContext, Props, ReplyTo};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

#[derive(Debug)]
pub enum PrinterMessage {
    Print {
        job: PrintJob,
        reply_to: ReplyTo<Receipt>,
    },
}

/// Behaviour of one printer instance. The jam flag is not persistent, so a restart
/// clears it.
pub struct ReceiptPrinter {
    paper_jam: bool,
    jam_probability: f64,
}

impl ReceiptPrinter {
    pub fn new(jam_probability: f64) -> Self {
        Self {
            paper_jam: false,
            jam_probability,
        }
    }
}

/// Props for a printer that jams with `jam_probability` per job.
///
/// `jam_probability` must be within `0.0..=1.0` (see
/// [`CoffeehouseConfig::validate`](crate::config::CoffeehouseConfig::validate)).
pub fn props(jam_probability: f64, seed: Option<u64>) -> Props<ReceiptPrinter> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Props::with_factory_and_state(move || ReceiptPrinter::new(jam_probability), rng)
}

#[async_trait]
impl Actor for ReceiptPrinter {
    type Msg = PrinterMessage;
    type State = StdRng;
    type Error = PrinterError;

    async fn handle(
        &mut self,
        ctx: &mut ActorContext<Self>,
        rng: &mut StdRng,
        msg: PrinterMessage,
    ) -> Result<(), PrinterError> {
        match msg {
            PrinterMessage::Print { job, reply_to } => {
                if rng.random_bool(self.jam_probability) {
                    self.paper_jam = true;
                }
                if self.paper_jam {
                    warn!(actor = %ctx.myself(), price = job.price, "Paper jam");
                    return Err(PrinterError::PaperJam);
                }
                debug!(actor = %ctx.myself(), price = job.price, "Printed receipt");
                let _ = reply_to.send(Receipt { price: job.price });
                Ok(())
            }
        }
    }
}
