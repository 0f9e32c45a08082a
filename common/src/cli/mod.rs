//! CLI-related shared utilities.
//!
//! This module centralizes CLI policy so binaries don't duplicate behavior:
//! one options record, one color policy, one style palette.

mod color;
mod options;

pub use color::{ColorWhen, Paint, Style};
pub use options::Options;
