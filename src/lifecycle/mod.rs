//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the complexity lives.
//! This module is the conductor that opens the coffeehouse, lets customers in, and
//! closes up.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - The barista is spawned at the top of the hierarchy; it
//!    spawns the register, which spawns the printer
//! 2. **Customers** - Admitted on demand, each watching the barista
//! 3. **Closing** - `ClosingTime` stops the barista subtree; customers find out
//!    through `Terminated`
//! 4. **Shutdown** - Every remaining actor is stopped and awaited
//! 5. **Observability Setup** - [`setup_tracing`] initializes logging
//!
//! ## Hierarchy
//!
//! ```text
//! coffeehouse/
//! ├── barista
//! │   └── register
//! │       └── printer
//! ├── johnny      (watches barista)
//! └── alina       (watches barista)
//! ```
//!
//! ## Observability & Tracing
//!
//! **Usage:**
//! ```bash
//! RUST_LOG=info cargo run      # Revenue, restarts, outcomes
//! RUST_LOG=debug cargo run     # Every message received by every actor
//! ```

pub mod coffeehouse;
pub mod tracing;

pub use self::coffeehouse::Coffeehouse;
pub use self::tracing::setup_tracing;
