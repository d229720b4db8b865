//! Tracing/logging initialization.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = try_init(&ObservabilityConfig::from_env());
}

/// Install the global subscriber described by `config`.
///
/// Fails if the filter directives do not parse or a global subscriber is
/// already installed.
pub fn try_init(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter {:?}", config.filter))?;

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(true)
            .try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))?;

    if let Some(raw) = &config.unrecognized_format {
        ::tracing::warn!(value = %raw, "unrecognized log format; using json");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_reported() {
        let config = ObservabilityConfig {
            filter: "stockline=notalevel".to_string(),
            ..ObservabilityConfig::default()
        };
        let err = try_init(&config).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        let _ = try_init(&ObservabilityConfig::default());
        init();
        init();
        let err = try_init(&ObservabilityConfig::default()).unwrap_err();
        assert!(err.to_string().contains("already installed"));
    }
}
