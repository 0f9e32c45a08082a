//! Standardized CLI color policy and style palette.
//!
//! Policy mirrors common Rust tool behavior:
//! - Command-line choice wins.
//! - `NO_COLOR` disables colors.
//! - `EMACS` implies non-interactive output.
//! - In `Auto`, only enable colors when the target stream is a TTY.
//!
//! The palette is a fixed set of named ANSI codes. It is pure formatting:
//! the only decision is enabled/disabled, made once at startup.

use std::env;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorWhen {
    /// Enable colors only when output is a TTY.
    #[default]
    Auto,

    /// Always enable colors.
    Always,

    /// Never enable colors.
    Never,
}

impl ColorWhen {
    // ---
    /// Returns whether ANSI color should be used for the given stream.
    pub fn should_color(self, stream: atty::Stream) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => {
                if env::var_os("NO_COLOR").is_some() {
                    return false;
                }

                if env::var_os("EMACS").is_some() {
                    return false;
                }

                atty::is(stream)
            }
        }
    }

    /// Convenience helper for stdout.
    pub fn should_color_stdout(self) -> bool {
        self.should_color(atty::Stream::Stdout)
    }

    /// Convenience helper for stderr.
    pub fn should_color_stderr(self) -> bool {
        self.should_color(atty::Stream::Stderr)
    }
}

/// Reset sequence appended after every painted fragment.
const RESET: &str = "\x1b[0m";

/// Named styles in the starter palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Section headers and banners (magenta).
    Header,

    /// Informational output (blue).
    Info,

    /// Success messages (green).
    Success,

    /// Warnings (yellow).
    Warning,

    /// Errors (red).
    Error,

    /// Bold text, no color change.
    Bold,

    /// Underlined text, no color change.
    Underline,

    /// Platform accent color, fixed at compile time: cyan on Windows
    /// consoles, blue elsewhere.
    Accent,
}

impl Style {
    // ---
    /// The ANSI escape sequence that starts this style.
    fn code(self) -> &'static str {
        match self {
            Style::Header => "\x1b[95m",
            Style::Info => "\x1b[94m",
            Style::Success => "\x1b[92m",
            Style::Warning => "\x1b[93m",
            Style::Error => "\x1b[91m",
            Style::Bold => "\x1b[1m",
            Style::Underline => "\x1b[4m",
            Style::Accent => {
                if cfg!(windows) {
                    "\x1b[96m"
                } else {
                    "\x1b[94m"
                }
            }
        }
    }
}

/// Wraps text in ANSI style codes when coloring is enabled.
///
/// Construct once from the resolved [`ColorWhen`]; the TTY and environment
/// checks happen at construction, not per call.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    enabled: bool,
}

impl Paint {
    // ---
    /// Paint policy for text going to stdout.
    pub fn stdout(color: ColorWhen) -> Self {
        Self {
            enabled: color.should_color_stdout(),
        }
    }

    /// Paint policy for text going to stderr.
    pub fn stderr(color: ColorWhen) -> Self {
        Self {
            enabled: color.should_color_stderr(),
        }
    }

    /// Returns `text` wrapped in the style's escape codes, or unchanged
    /// when coloring is disabled.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", style.code(), text, RESET)
        } else {
            text.to_string()
        }
    }
}
