//! Pure data structures exchanged between the coffeehouse actors.
//!
//! Every value here is immutable once built and self-contained, so it can cross
//! actor boundaries without sharing anything.

pub mod article;
pub mod serving;

pub use article::*;
pub use serving::*;
