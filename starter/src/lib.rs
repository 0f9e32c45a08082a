//! Starter application library.
//!
//! The placeholder entry point every new tool begins from: log a start
//! marker, print a greeting, log a finish marker. Replace the middle of
//! [`run`] with real application logic.

use anyhow::Result;
use tracing::info;

use cli_starter_common::{Options, Paint, Style};

/// The entry point the binary hands control to.
///
/// # Errors
///
/// The placeholder itself cannot fail; the `Result` is the seam real
/// application logic reports through.
pub fn run(options: &Options) -> Result<()> {
    // ---
    info!("Starting main function");

    // Start your code here
    let paint = Paint::stdout(options.color);
    println!("{}", paint.paint(Style::Header, "hello world!"));
    if !options.arg1.is_empty() {
        info!("arg1: {}", options.arg1);
    }

    info!("Main function finished");
    Ok(())
}
