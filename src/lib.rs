//! Duesboard renders a read-only treasury dashboard for a parent group:
//! collections with per-member payment state, balance with breakdown,
//! expenses, events, notices, banking details, and a member lookup.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Duesboard tracing initialized.");
    });
}
