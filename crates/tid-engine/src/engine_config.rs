use std::time::Duration;

/// Engine tuning knobs, typically derived from [`tid_config::Config`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The request origin this instance serves (scheme://host[:port]).
    pub origin: String,
    /// Settling interval before re-resolving after an impersonation change.
    pub settle_delay: Duration,
    /// Whether to upsert the tenant-session marker after a successful bind.
    pub write_session_marker: bool,
}

impl EngineConfig {
    pub fn from_config(config: &tid_config::Config, origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            settle_delay: Duration::from_millis(config.resolver.settle_delay_ms),
            write_session_marker: config.resolver.write_session_marker,
        }
    }
}
