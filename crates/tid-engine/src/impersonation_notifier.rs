use tokio::sync::broadcast;

/// Narrow "impersonation changed" signal the engine subscribes to.
///
/// Raised by the administrative-impersonation feature after it writes an
/// override record; the engine waits a settling interval before re-resolving
/// because that write commits in a separate transaction.
#[derive(Clone)]
pub struct ImpersonationNotifier {
    tx: broadcast::Sender<()>,
}

impl ImpersonationNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(8);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn notify(&self) {
        log::debug!("Impersonation change notified");
        let _ = self.tx.send(());
    }
}

impl Default for ImpersonationNotifier {
    fn default() -> Self {
        Self::new()
    }
}
