use crate::{DEFAULT_SETTLE_DELAY_MS, DEFAULT_WRITE_SESSION_MARKER};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// How long to wait after an impersonation-change notification before
    /// re-resolving, so the originating write can commit. Tunable: verify
    /// against the override table's write-commit latency.
    pub settle_delay_ms: u64,
    /// Whether to upsert the tenant-session marker after a successful bind
    pub write_session_marker: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            write_session_marker: DEFAULT_WRITE_SESSION_MARKER,
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> crate::ConfigErrorResult<()> {
        if self.settle_delay_ms > 60_000 {
            return Err(crate::ConfigError::resolver(
                "resolver.settle_delay_ms must not exceed 60000",
            ));
        }
        Ok(())
    }
}
