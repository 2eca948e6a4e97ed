//! # Customer Actor
//!
//! Drives the simulation. A caffeine withdrawal warning makes the customer send an
//! espresso request to the barista (a plain tell, not an ask: the barista's answer
//! arrives as an ordinary message through a reply adapter).
//!
//! ## Outcomes
//!
//! Each request ends in exactly one of:
//!
//! | Arrives | Meaning | Reported as |
//! |---------|---------|-------------|
//! | [`Serving::Served`] | Coffee and receipt | [`CustomerEvent::Fulfilled`] |
//! | [`Serving::ComebackLater`] | The register was too slow | [`CustomerEvent::ComebackLater`] |
//! | `Terminated` for the barista | The coffeehouse closed | [`CustomerEvent::VendorGone`] |
//!
//! `ComebackLater` is accepted and reported, nothing more: the customer does not
//! retry on its own. Once the barista is gone, further warnings are logged and
//! dropped.

use crate::barista::BaristaMessage;
use crate::model::{Receipt, Serving};
use actor_framework::{Actor, ActorContext, ActorRef, Props, Terminated};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum CustomerMessage {
    CaffeineWithdrawalWarning,
    /// The barista's answer to an earlier request.
    Served(Serving),
    VendorTerminated(Terminated),
}

/// What a customer reports to its observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerEvent {
    Fulfilled(Receipt),
    ComebackLater,
    VendorGone,
}

pub struct Customer {
    vendor: ActorRef<BaristaMessage>,
    observer: Option<ActorRef<CustomerEvent>>,
    vendor_gone: bool,
    pending: u32,
}

impl Customer {
    pub fn new(vendor: ActorRef<BaristaMessage>) -> Self {
        Self {
            vendor,
            observer: None,
            vendor_gone: false,
            pending: 0,
        }
    }

    /// Also report every outcome to `observer`.
    pub fn with_observer(mut self, observer: ActorRef<CustomerEvent>) -> Self {
        self.observer = Some(observer);
        self
    }

    fn report(&self, event: CustomerEvent) {
        if let Some(observer) = &self.observer {
            let _ = observer.tell(event);
        }
    }
}

/// Props for a customer buying from `vendor`.
pub fn props(
    vendor: ActorRef<BaristaMessage>,
    observer: Option<ActorRef<CustomerEvent>>,
) -> Props<Customer> {
    Props::new(move || {
        let customer = Customer::new(vendor.clone());
        match &observer {
            Some(observer) => customer.with_observer(observer.clone()),
            None => customer,
        }
    })
}

#[async_trait]
impl Actor for Customer {
    type Msg = CustomerMessage;
    type State = ();
    type Error = Infallible;

    async fn pre_start(
        &mut self,
        ctx: &mut ActorContext<Self>,
        _state: &mut (),
    ) -> Result<(), Infallible> {
        ctx.watch(&self.vendor, CustomerMessage::VendorTerminated);
        Ok(())
    }

    async fn handle(
        &mut self,
        ctx: &mut ActorContext<Self>,
        _state: &mut (),
        msg: CustomerMessage,
    ) -> Result<(), Infallible> {
        match msg {
            CustomerMessage::CaffeineWithdrawalWarning => {
                if self.vendor_gone {
                    info!(customer = %ctx.myself(), "No coffeehouse to go to");
                    return Ok(());
                }
                let reply_to = ctx.myself().reply_to(CustomerMessage::Served);
                match self.vendor.tell(BaristaMessage::EspressoRequest { reply_to }) {
                    Ok(()) => {
                        self.pending += 1;
                        debug!(customer = %ctx.myself(), pending = self.pending, "Asked for an espresso");
                    }
                    Err(e) => warn!(customer = %ctx.myself(), error = %e, "Could not reach the barista"),
                }
            }
            CustomerMessage::Served(Serving::Served { receipt, .. }) => {
                self.pending = self.pending.saturating_sub(1);
                info!(customer = %ctx.myself(), price = receipt.price, "Yay, coffee");
                self.report(CustomerEvent::Fulfilled(receipt));
            }
            CustomerMessage::Served(Serving::ComebackLater) => {
                self.pending = self.pending.saturating_sub(1);
                info!(customer = %ctx.myself(), "Told to come back later");
                self.report(CustomerEvent::ComebackLater);
            }
            CustomerMessage::VendorTerminated(terminated) => {
                if terminated.actor != self.vendor.id() {
                    debug!(customer = %ctx.myself(), actor = %terminated.path, "Ignoring unrelated termination");
                    return Ok(());
                }
                if self.vendor_gone {
                    return Ok(());
                }
                self.vendor_gone = true;
                ctx.unwatch(&self.vendor);
                info!(customer = %ctx.myself(), pending = self.pending, "Oh well, let's find another coffeehouse");
                self.report(CustomerEvent::VendorGone);
            }
        }
        Ok(())
    }
}
