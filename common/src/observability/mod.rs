//! Observability utilities (logging).

mod tracing;

pub use tracing::{build_subscriber, init_tracing, LogConfig};

#[cfg(test)]
pub(crate) use tracing::test_support;
