//! # Coffeehouse
//!
//! > **Four actors, one pipeline, and a printer that jams.**
//!
//! A customer asks a barista for an espresso; the barista charges it at the register;
//! the register has a receipt printed. Each of them is an actor with private state,
//! reachable only by message, and each can fail on its own. The printer fails on
//! purpose: it jams at random, gets restarted by the runtime, and the rest of the
//! chain has to cope with an answer that never comes.
//!
//! ## 🏗️ Design
//!
//! ### Ask chains instead of blocking
//! The barista asks the register and the register asks the printer, each with a
//! deadline. Neither waits inside a handler: replies are piped back as messages, so
//! every actor keeps serving its mailbox while a request is outstanding.
//!
//! ### Timeouts become answers
//! A print job lost to a jam is never reported as an error. The register simply
//! never completes that transaction, the barista's ask times out, and the barista
//! turns the timeout into a [`ComebackLater`](model::Serving::ComebackLater) for the
//! customer.
//!
//! ### State that survives restarts
//! Restarting an actor replaces its behaviour but keeps its identity and its
//! persistent state. The register keeps its revenue there; the printer's paper
//! jam is behaviour state, so a restart clears it.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`actor_framework`])
//! Mailboxes, ask/pipe, watches and the always-restart supervisor.
//!
//! ### 2. The Actors ([`customer`], [`barista`], [`register`], [`printer`])
//! ```text
//! Customer ──tell──► Barista ──ask──► Register ──ask──► Printer
//!    ▲                  │                ▲                 │
//!    └──── Serving ◄────┘                └──── Receipt ◄───┘
//! ```
//!
//! ### 3. The Data ([`model`], [`config`])
//! Messages, receipts, prices, and the knobs: jam probability and ask timeout.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`Coffeehouse`](lifecycle::Coffeehouse) opens the shop, admits customers and closes up.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! COFFEEHOUSE_JAM_PROBABILITY=1 COFFEEHOUSE_ASK_TIMEOUT_MS=200 RUST_LOG=info cargo run
//! ```

pub mod barista;
pub mod config;
pub mod customer;
pub mod lifecycle;
pub mod model;
pub mod printer;
pub mod register;
