//! Base starter CLI binary.
//!
//! Parses options, configures the dual-sink logger, and hands control to
//! the library entry point. Copy this crate to begin a new tool.

use tracing::error;

use cli_starter_common::{init_tracing, LogConfig, Options, StarterError};

fn main() {
    // ---
    // Usage errors never reach this far: clap prints the usage text and
    // exits with code 2.
    let options = Options::parse_arguments();

    let config = LogConfig::from_options(&options);
    if let Err(err) = init_tracing(&config) {
        eprintln!("failed to configure logging: {err:#}");
        std::process::exit(1);
    }

    if let Err(err) = starter::run(&options) {
        error!("{err:#}");
        let code = err
            .downcast_ref::<StarterError>()
            .map_or(1, StarterError::exit_code);
        std::process::exit(code);
    }
}
