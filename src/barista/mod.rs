//! # Barista Actor
//!
//! The coffee vendor customers talk to. A coffee request becomes a transaction at
//! the [`register`](crate::register) plus a filled cup.
//!
//! ## Timeout Becomes an Answer
//!
//! The barista asks the register with a deadline and pipes the outcome back to the
//! customer who asked:
//!
//! - a receipt in time → [`Serving::Served`] with a filled cup,
//! - the deadline passes → [`Serving::ComebackLater`].
//!
//! This is the one place a timeout is turned into an ordinary answer instead of an
//! error. The barista itself never waits: it keeps taking requests while earlier
//! ones are still at the register.
//!
//! ## Closing Time
//!
//! [`BaristaMessage::ClosingTime`] stops the barista, and with it the register and the
//! printer. Requests still in flight are not drained; their customers get a
//! `ComebackLater` once the deadline passes, and every watcher gets `Terminated`.

use crate::config::CoffeehouseConfig;
use crate::model::{Article, EspressoCup, Receipt, Serving, Transaction};
use crate::register::{self, RegisterMessage};
use actor_framework::{Actor, ActorContext, ActorRef, FrameworkError, Props, ReplyTo};
use async_trait::async_trait;
use std::convert::Infallible;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug)]
pub enum BaristaMessage {
    EspressoRequest { reply_to: ReplyTo<Serving> },
    CappuccinoRequest { reply_to: ReplyTo<Serving> },
    ClosingTime,
}

/// Where the barista's register comes from.
enum RegisterSource {
    /// Spawn a register child from this configuration.
    Spawn(CoffeehouseConfig),
    /// Use a register that already exists.
    Existing(ActorRef<RegisterMessage>),
}

pub struct Barista {
    source: RegisterSource,
    ask_timeout: Duration,
    register: Option<ActorRef<RegisterMessage>>,
}

impl Barista {
    pub fn new(config: CoffeehouseConfig) -> Self {
        Self {
            ask_timeout: config.ask_timeout,
            source: RegisterSource::Spawn(config),
            register: None,
        }
    }

    /// A barista that charges at `register` instead of running its own.
    pub fn with_register(register: ActorRef<RegisterMessage>, ask_timeout: Duration) -> Self {
        Self {
            source: RegisterSource::Existing(register),
            ask_timeout,
            register: None,
        }
    }

    fn take_order(
        &self,
        ctx: &ActorContext<Self>,
        article: Article,
        reply_to: ReplyTo<Serving>,
    ) {
        let Some(register) = &self.register else {
            warn!(actor = %ctx.myself(), %article, "No register, dropping request");
            return;
        };
        let charged = register.ask(
            |reply_to| RegisterMessage::Transaction {
                transaction: Transaction { article },
                reply_to,
            },
            self.ask_timeout,
        );
        let path = ctx.myself().to_string();
        ctx.pipe_to(
            async move { serve(&path, article, charged.await) },
            reply_to,
        );
    }
}

fn serve(path: &str, article: Article, charged: Result<Receipt, FrameworkError>) -> Option<Serving> {
    match charged {
        Ok(receipt) => Some(Serving::Served {
            cup: EspressoCup::Filled,
            receipt,
        }),
        Err(FrameworkError::AskTimeout(after)) => {
            info!(actor = %path, %article, ?after, "Register too slow, come back later");
            Some(Serving::ComebackLater)
        }
        Err(e) => {
            warn!(actor = %path, %article, error = %e, "Transaction failed");
            None
        }
    }
}

/// Props for a barista running its own register.
pub fn props(config: CoffeehouseConfig) -> Props<Barista> {
    Props::new(move || Barista::new(config.clone()))
}

#[async_trait]
impl Actor for Barista {
    type Msg = BaristaMessage;
    type State = ();
    type Error = Infallible;

    async fn pre_start(
        &mut self,
        ctx: &mut ActorContext<Self>,
        _state: &mut (),
    ) -> Result<(), Infallible> {
        let register = match &self.source {
            RegisterSource::Spawn(config) => ctx.spawn("register", register::props(config.clone())),
            RegisterSource::Existing(register) => register.clone(),
        };
        self.register = Some(register);
        Ok(())
    }

    async fn handle(
        &mut self,
        ctx: &mut ActorContext<Self>,
        _state: &mut (),
        msg: BaristaMessage,
    ) -> Result<(), Infallible> {
        match msg {
            BaristaMessage::EspressoRequest { reply_to } => {
                self.take_order(ctx, Article::Espresso, reply_to)
            }
            BaristaMessage::CappuccinoRequest { reply_to } => {
                self.take_order(ctx, Article::Cappuccino, reply_to)
            }
            BaristaMessage::ClosingTime => {
                info!(actor = %ctx.myself(), "Closing time");
                ctx.stop();
            }
        }
        Ok(())
    }
}
