//! The graff command-line plotter.
//!
//! The binary is a thin dispatcher over [`commands`]; everything it prints
//! goes through writers passed in by the caller, so the commands run the
//! same under test as they do on a terminal.

use std::sync::Once;

pub mod commands;
pub mod reporting;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay nothing for
/// the `tracing` calls in the library crates. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
