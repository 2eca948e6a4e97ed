/// Requests, receipts and what finally ends up on the counter.
use crate::model::Article;
use serde::{Deserialize, Serialize};

/// Request to charge for one article. Carries no price on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub article: Article,
}

/// Request to print a receipt for `price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJob {
    pub price: u64,
}

/// Proof of payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub price: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EspressoCup {
    Clean,
    Filled,
    Dirty,
}

/// The barista's answer to a coffee request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Serving {
    /// A filled cup, paid for.
    Served { cup: EspressoCup, receipt: Receipt },
    /// The register did not answer in time.
    ComebackLater,
}
