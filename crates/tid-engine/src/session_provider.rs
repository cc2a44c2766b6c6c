use crate::Session;

use async_trait::async_trait;
use tid_core::AuthEvent;
use tokio::sync::broadcast;

/// External collaborator supplying the current session and auth-state
/// transitions.
///
/// Event receivers only enqueue work; the engine never resolves inside the
/// delivery of an auth event, so implementations may emit events from their
/// own callbacks without risking re-entrant deadlock.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_session(&self) -> Option<Session>;

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}
