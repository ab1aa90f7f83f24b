//! Logging utilities for the Tourify application.
//!
//! This module provides a standardized approach to logging across all
//! crates in the workspace. The backend calls [`init`] once at startup;
//! everything else just uses the `tracing` macros.

use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Messages are formatted with timestamps, log levels, targets, and
/// file/line information. `RUST_LOG` still takes precedence for
/// fine-grained directives.
pub fn init_with_level(level: Level) {
    // Create a filter based on the specified level; RUST_LOG directives
    // still override it
    let filter = EnvFilter::from_default_env().add_directive(LevelFilter::from_level(level).into());

    // Use try_init to handle the case where a global default subscriber
    // has already been set (e.g. by a test harness)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
