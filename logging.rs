//! Logger setup. Logs go to stderr so stdout carries only the report.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Install the terminal logger at `level`. No-op if a logger is already set.
pub fn initialize(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// Initializes logging for unit tests; safe to call from every test.
pub fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    initialize(level);
}
