//! Error types for the receipt printer.

use thiserror::Error;

/// Ways the printer can fail while printing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PrinterError {
    /// The paper is jammed. Sticky until the printer is restarted.
    #[error("paper jam")]
    PaperJam,
}
