//! # Register Actor
//!
//! The cash register charges for transactions. It resolves the price itself, has its
//! [`printer`](crate::printer) child print a receipt, books the revenue and hands the
//! receipt back to whoever asked.
//!
//! ## Ask, Pipe, Complete
//!
//! ```text
//! Transaction(article) ──► ask printer PrintJob(price) ──► pipe to self
//!                                                             │
//!                          Printed(PrintCompletion) ◄─────────┘
//!                          revenue += price; requester ◄── receipt
//! ```
//!
//! The register never waits on the printer inside a handler. The reply is piped
//! back as a [`RegisterMessage::Printed`] message that carries the requester of the
//! transaction, so revenue is only ever touched by the register's own sequential
//! message processing. A print job that fails or times out produces no `Printed`
//! message at all: nothing is booked, and the requester is left to time out.
//!
//! A [`PrintCompletion`] can only be built by the register, so revenue only ever
//! grows by a price the register resolved itself.
//!
//! ## State Across Restarts
//!
//! [`RegisterState`] lives in the actor's persistent slot. Revenue starts at zero
//! when the register is spawned and is carried over when a failure makes the
//! supervisor replace the register's behaviour. The slot also seeds each printer the
//! register spawns, so a seeded run draws a fresh jam sequence after every restart
//! instead of replaying the first one.

pub mod error;

pub use error::*;

use crate::config::CoffeehouseConfig;
use crate::model::{PriceList, PrintJob, Receipt, Transaction};
use crate::printer::{self, PrinterMessage};
use actor_framework::{Actor, ActorContext, ActorFault, ActorRef, Props, ReplyTo};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum RegisterMessage {
    /// Charge for an article and reply with the receipt.
    Transaction {
        transaction: Transaction,
        reply_to: ReplyTo<Receipt>,
    },
    /// Completion of a print job started by `Transaction`. Sent by the register to
    /// itself.
    Printed(PrintCompletion),
    /// Report the running revenue total.
    Revenue { reply_to: ReplyTo<u64> },
}

/// A printed receipt on its way back to the customer who paid for it.
///
/// Only the register builds these:
///
/// ```compile_fail
/// use actor_framework::ReplyTo;
/// use coffeehouse::model::Receipt;
/// use coffeehouse::register::PrintCompletion;
///
/// let forged = PrintCompletion {
///     requester: ReplyTo::new(|_| Ok(())),
///     receipt: Receipt { price: 1_000_000 },
/// };
/// ```
#[derive(Debug)]
pub struct PrintCompletion {
    requester: ReplyTo<Receipt>,
    receipt: Receipt,
}

/// What a register keeps across restarts.
#[derive(Debug)]
pub struct RegisterState {
    /// Running total in minor currency units.
    revenue: u64,
    printer_seeds: Option<StdRng>,
}

impl RegisterState {
    /// Zero revenue. With a `seed`, every printer gets its own seed drawn from it.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            revenue: 0,
            printer_seeds: seed.map(StdRng::seed_from_u64),
        }
    }

    pub fn revenue(&self) -> u64 {
        self.revenue
    }

    fn book(&mut self, price: u64) -> Result<u64, RegisterError> {
        self.revenue = self
            .revenue
            .checked_add(price)
            .ok_or(RegisterError::RevenueOverflow {
                revenue: self.revenue,
                price,
            })?;
        Ok(self.revenue)
    }

    fn next_printer_seed(&mut self) -> Option<u64> {
        self.printer_seeds.as_mut().map(|seeds| seeds.random())
    }
}

pub struct Register {
    prices: PriceList,
    print_timeout: Duration,
    jam_probability: f64,
    printer: Option<ActorRef<PrinterMessage>>,
}

impl Register {
    pub fn new(config: &CoffeehouseConfig) -> Self {
        Self {
            prices: config.prices.clone(),
            print_timeout: config.ask_timeout,
            jam_probability: config.jam_probability,
            printer: None,
        }
    }
}

/// Props for a register starting with zero revenue.
pub fn props(config: CoffeehouseConfig) -> Props<Register> {
    let state = RegisterState::new(config.seed);
    Props::with_factory_and_state(move || Register::new(&config), state)
}

#[async_trait]
impl Actor for Register {
    type Msg = RegisterMessage;
    type State = RegisterState;
    type Error = RegisterError;

    async fn pre_start(
        &mut self,
        ctx: &mut ActorContext<Self>,
        state: &mut RegisterState,
    ) -> Result<(), RegisterError> {
        let seed = state.next_printer_seed();
        let printer = ctx.spawn("printer", printer::props(self.jam_probability, seed));
        self.printer = Some(printer);
        Ok(())
    }

    async fn handle(
        &mut self,
        ctx: &mut ActorContext<Self>,
        state: &mut RegisterState,
        msg: RegisterMessage,
    ) -> Result<(), RegisterError> {
        match msg {
            RegisterMessage::Transaction {
                transaction,
                reply_to,
            } => {
                let article = transaction.article;
                let price = self
                    .prices
                    .price_of(article)
                    .ok_or(RegisterError::Unpriced(article))?;
                let printer = self.printer.as_ref().ok_or(RegisterError::NoPrinter)?;
                debug!(actor = %ctx.myself(), %article, price, "Transaction");

                let printed = printer.ask(
                    |reply_to| PrinterMessage::Print {
                        job: PrintJob { price },
                        reply_to,
                    },
                    self.print_timeout,
                );
                let path = ctx.myself().to_string();
                ctx.pipe_to_self(printed, move |result| match result {
                    Ok(receipt) => Some(RegisterMessage::Printed(PrintCompletion {
                        requester: reply_to,
                        receipt,
                    })),
                    Err(e) => {
                        warn!(actor = %path, %article, error = %e, "No receipt");
                        None
                    }
                });
            }
            RegisterMessage::Printed(PrintCompletion { requester, receipt }) => {
                let revenue = state.book(receipt.price)?;
                info!(actor = %ctx.myself(), revenue, "Revenue incremented");
                if requester.send(receipt).is_err() {
                    debug!(actor = %ctx.myself(), "Requester no longer waiting for receipt");
                }
            }
            RegisterMessage::Revenue { reply_to } => {
                let _ = reply_to.send(state.revenue());
            }
        }
        Ok(())
    }

    async fn post_restart(
        &mut self,
        ctx: &mut ActorContext<Self>,
        state: &mut RegisterState,
        cause: &ActorFault,
    ) -> Result<(), RegisterError> {
        info!(actor = %ctx.myself(), revenue = state.revenue(), %cause, "Restarted");
        self.pre_start(ctx, state).await
    }
}
