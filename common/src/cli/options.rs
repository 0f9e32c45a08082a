//! Option parsing and validation for starter binaries.
//!
//! One options record per process invocation: parsed once, validated on
//! demand, immutable afterwards. Positional arguments are rejected with
//! clap's usage text and exit code 2.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::cli::color::ColorWhen;
use crate::error::StarterError;

/// Parsed command-line options.
///
/// Defaults are applied during parsing, so a constructed `Options` is
/// always fully populated.
#[derive(Parser, Debug, Clone)]
#[command(name = "starter", author, version, about = "Base starter CLI", long_about = None)]
pub struct Options {
    /// First argument (free-form text)
    #[arg(short = 'a', long, default_value = "", value_name = "VALUE")]
    pub arg1: String,

    /// Do not log on console; file logging stays active
    #[arg(short, long)]
    pub quiet: bool,

    /// Coloring
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorWhen,

    /// Log file path (append mode)
    #[arg(
        long,
        env = "STARTER_LOG",
        default_value = "starter.log",
        value_name = "PATH"
    )]
    pub log_file: PathBuf,
}

impl Options {
    // ---
    /// Parses the process argument list.
    ///
    /// On malformed input clap prints the usage text and exits the
    /// process with code 2 before returning.
    pub fn parse_arguments() -> Self {
        Self::parse()
    }

    /// Parses an explicit argument list without touching the process.
    ///
    /// The first element is the program name, as in `std::env::args`.
    ///
    /// # Errors
    ///
    /// Returns the clap error (usage text included) on malformed input.
    pub fn try_parse_arguments<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(argv)
    }

    /// Whether console logging is wanted: the quiet flag inverted.
    pub fn verbose(&self) -> bool {
        !self.quiet
    }

    /// Strict-mode validation: requires `arg1` to be non-empty.
    ///
    /// The shipped binary is lenient and never calls this; callers that
    /// treat a missing `arg1` as a configuration error opt in explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`StarterError::MissingArgument`] naming the argument.
    pub fn validate(&self) -> Result<(), StarterError> {
        // ---
        if self.arg1.is_empty() {
            return Err(StarterError::MissingArgument { name: "arg1" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn parse(args: &[&str]) -> Options {
        // ---
        let argv = std::iter::once("starter").chain(args.iter().copied());
        Options::try_parse_arguments(argv).expect("arguments should parse")
    }

    #[test]
    fn empty_argv_yields_defaults() {
        // ---
        std::env::remove_var("STARTER_LOG");
        let options = parse(&[]);
        assert_eq!(options.arg1, "");
        assert!(options.verbose());
        assert_eq!(options.color, ColorWhen::Auto);
        assert_eq!(options.log_file, PathBuf::from("starter.log"));
    }

    #[test]
    fn quiet_flag_inverts_verbose() {
        // ---
        assert!(!parse(&["-q"]).verbose());
        assert!(!parse(&["--quiet"]).verbose());
        assert!(parse(&[]).verbose());
    }

    #[test]
    fn arg1_accepts_short_and_long_form() {
        // ---
        assert_eq!(parse(&["--arg1", "value"]).arg1, "value");
        assert_eq!(parse(&["-a", "value"]).arg1, "value");
    }

    #[test]
    fn positional_arguments_are_a_usage_error() {
        // ---
        let err = Options::try_parse_arguments(["starter", "extra"])
            .expect_err("positionals must be rejected");
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        // ---
        let err = Options::try_parse_arguments(["starter", "--bogus"])
            .expect_err("unknown flags must be rejected");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn validate_requires_arg1() {
        // ---
        let err = parse(&[]).validate().expect_err("empty arg1 must fail");
        match err {
            StarterError::MissingArgument { name } => assert_eq!(name, "arg1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_accepts_present_arg1() {
        // ---
        assert!(parse(&["--arg1", "x"]).validate().is_ok());
    }
}
