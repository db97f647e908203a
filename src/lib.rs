#![doc(test(attr(deny(warnings))))]

//! Upkeep Core scores the risk of building systems, rolls it up into property health,
//! and aggregates an owner's portfolio into a dashboard view.

pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod currency;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod portfolio;
pub mod scoring;
pub mod seed;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Upkeep Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
