//! # Observability & Tracing
//!
//! Structured logging for the whole actor system, built on the `tracing` crate.
//!
//! Every runtime event carries an `actor` field holding the actor's path
//! (e.g. `coffeehouse/barista/register`), so the log reads as a conversation
//! between actors:
//!
//! ```text
//! INFO Actor started actor=coffeehouse/barista/register/printer
//! WARN Paper jam actor=coffeehouse/barista/register/printer price=150
//! WARN Actor failed, restarting actor=coffeehouse/barista/register/printer error=paper jam restarts=1
//! WARN No receipt actor=coffeehouse/barista/register article=espresso error=Ask timed out after 2s
//! INFO Register too slow, come back later actor=coffeehouse/barista article=espresso after=2s
//! INFO Told to come back later customer=coffeehouse/johnny
//! INFO Revenue incremented actor=coffeehouse/barista/register revenue=150
//! INFO Yay, coffee customer=coffeehouse/alina price=150
//! ```
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes, revenue and restarts
//! RUST_LOG=info cargo run
//!
//! # Every message each actor receives
//! RUST_LOG=debug cargo run
//!
//! # Only the runtime
//! RUST_LOG=actor_framework=debug cargo run
//! ```

/// Initializes the tracing/logging infrastructure for the application.
///
/// - **Environment-based filtering**: Controlled via `RUST_LOG`
/// - **Compact formatting**: No module paths; the `actor` field says who is talking
///
/// Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
