use serde::{Deserialize, Serialize};

/// Auth-state transitions delivered by the session provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    SignedIn,
    TokenRefreshed,
    SignedOut,
}
