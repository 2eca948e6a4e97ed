//! Error types for the cash register.

use crate::model::Article;
use thiserror::Error;

/// Errors that fail a register transaction (and restart the register).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegisterError {
    /// The price list has no entry for the article.
    #[error("no price for {0}")]
    Unpriced(Article),

    /// The register has no printer to hand receipts to.
    #[error("no receipt printer attached")]
    NoPrinter,

    /// Booking the receipt would overflow the revenue total.
    #[error("revenue {revenue} cannot absorb another {price}")]
    RevenueOverflow { revenue: u64, price: u64 },
}
