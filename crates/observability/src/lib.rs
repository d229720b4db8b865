//! Tracing/logging setup shared by binaries and test harnesses that embed the
//! allocation domain.

/// Initialize process-wide observability (tracing/logging) from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize with an explicit configuration, reporting failures.
pub fn try_init(config: &ObservabilityConfig) -> anyhow::Result<()> {
    tracing::try_init(config)
}

/// Environment-driven configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
