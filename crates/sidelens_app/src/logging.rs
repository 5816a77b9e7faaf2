//! Logging initialization for the panel binary.
//!
//! Always writes `./sidelens.log` in the current working directory;
//! verbose mode mirrors log lines to the terminal.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_PATH: &str = "./sidelens.log";

/// Initialize the global logger. Safe to call exactly once at startup.
pub fn initialize(verbose: bool) {
    let level = LevelFilter::Info;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if verbose {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    match File::create(LOG_PATH) {
        Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
        Err(err) => eprintln!("Warning: could not create log file at {LOG_PATH}: {err}"),
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}
