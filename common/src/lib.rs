//! Common CLI bootstrap utilities shared by starter binaries.
//!
//! This crate provides the pieces every starter binary wires together:
//! option parsing, dual-sink logging (file plus optional console),
//! a color policy with a small style palette, and file access helpers.

pub mod cli;
pub mod error;
pub mod fs;
pub mod observability;

pub use cli::{ColorWhen, Options, Paint, Style};
pub use error::StarterError;
pub use fs::{check_accessible, open_for_read, AccessMode};
pub use observability::{build_subscriber, init_tracing, LogConfig};
