#![doc(test(attr(deny(warnings))))]

//! Pocketbook is a personal budget tracker: a transaction ledger persisted to
//! a local key-value store, with dashboard totals, account balances and a
//! filterable history, driven from an interactive or scripted shell.

pub mod cli;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Pocketbook tracing initialized.");
    });
}
