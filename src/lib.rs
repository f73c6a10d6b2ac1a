#![doc(test(attr(deny(warnings))))]

//! Tally Core converts semi-structured plain-text outlines (headers,
//! `name: value` items, `[X]` exclusion markers, dash separators) into a
//! sectioned ledger with derived totals, and renders edited ledgers back
//! into the same text form.

pub mod errors;
pub mod export;
pub mod ledger;
pub mod session;
pub mod storage;
pub mod text;
pub mod utils;

pub use errors::LedgerError;
pub use ledger::{Item, Ledger, Section, Value};
pub use session::EditSession;
pub use text::{parse, render};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tally Core tracing initialized.");
    });
}
