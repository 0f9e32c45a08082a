//! Tracing initialization.
//!
//! Centralizes logging config so all starter binaries behave the same:
//! a file sink that is always attached (append mode) and a console sink
//! on stderr, gated by the quiet flag. Log lines use one fixed format
//! on both sinks:
//!
//! ```text
//! 2024-05-01 12:00:00.000 - INFO - Starting main function
//! ```

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::cli::{ColorWhen, Options};

/// Guards the global dispatcher: only the first `init_tracing` call
/// installs anything, so sinks are never attached twice.
static INIT: Once = Once::new();

/// Logger configuration derived from parsed options.
#[derive(Debug, Clone)]
pub struct LogConfig {
    // ---
    /// Log file path, opened in create+append mode.
    pub file: PathBuf,

    /// Attach the console sink (quiet flag absent).
    pub console: bool,

    /// ANSI color policy for the console sink.
    pub color: ColorWhen,
}

impl Default for LogConfig {
    fn default() -> Self {
        // ---
        Self {
            file: PathBuf::from("starter.log"),
            console: true,
            color: ColorWhen::Auto,
        }
    }
}

impl LogConfig {
    // ---
    /// Derives the logger configuration from parsed options.
    pub fn from_options(options: &Options) -> Self {
        // ---
        Self {
            file: options.log_file.clone(),
            console: options.verbose(),
            color: options.color,
        }
    }
}

/// Timestamp format shared by both sinks: `YYYY-MM-DD HH:MM:SS.mmm`,
/// local time.
struct LineTime;

impl FormatTime for LineTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// The fixed `timestamp - LEVEL - message` line format.
struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        // ---
        LineTime.format_time(&mut writer)?;
        write!(writer, " - {} - ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Builds the layered subscriber without installing it.
///
/// The file layer is always present; the console layer only when
/// `console_writer` is `Some`. Level filtering follows `RUST_LOG` when
/// set, `info` otherwise. Tests inject in-memory writers here and assert
/// on the emitted lines instead of touching the global dispatcher.
pub fn build_subscriber<FW, CW>(
    file_writer: FW,
    console_writer: Option<CW>,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    FW: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    CW: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    // ---
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(file_writer);

    let console_layer = console_writer.map(|writer| {
        fmt::layer()
            .event_format(LineFormat)
            .with_ansi(ansi)
            .with_writer(writer)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
}

/// Initializes the process-wide logger from `config`.
///
/// The log file is opened in create+append mode; prior content is never
/// truncated. Calling this more than once is a no-op after the first
/// successful call.
///
/// # Errors
///
/// Returns an error when the log file cannot be opened.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    // ---
    if INIT.is_completed() {
        return Ok(());
    }

    let file = open_log_file(&config.file)?;

    let console_writer = config.console.then_some(io::stderr as fn() -> io::Stderr);
    let ansi = config.color.should_color_stderr();

    INIT.call_once(move || {
        build_subscriber(Mutex::new(file), console_writer, ansi).init();
    });

    Ok(())
}

/// Opens the log file in create+append mode; never truncates.
fn open_log_file(path: &Path) -> Result<File> {
    // ---
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))
}

#[cfg(test)]
pub(crate) mod test_support {
    // ---
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    /// Shared in-memory sink usable as a `MakeWriter` in tests.
    #[derive(Clone, Default)]
    pub(crate) struct MemWriter {
        buf: Arc<Mutex<Vec<u8>>>,
    }

    impl MemWriter {
        // ---
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.buf.lock().unwrap().clone()).expect("utf-8 log output")
        }

        pub(crate) fn lines(&self) -> Vec<String> {
            self.contents().lines().map(str::to_owned).collect()
        }
    }

    impl Write for MemWriter {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for MemWriter {
        type Writer = MemWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }
}
