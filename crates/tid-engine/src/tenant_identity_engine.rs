//! The lifecycle manager owning the published tenant identity.

use crate::{
    EngineConfig, EngineError, ImpersonationNotifier, Resolver, Result as EngineResult, Session,
    SessionProvider,
};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use tid_auth::{ClaimsExtractor, DomainHintExtractor};
use tid_core::{AuthEvent, TenantIdentity};
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;

struct RefreshRequest {
    done: Option<oneshot::Sender<()>>,
}

/// Publish side of the engine, shared between the worker and the event loop.
///
/// Only one resolution may be eligible to publish at a time: every pass takes
/// a ticket from the attempt counter and may publish only while its ticket is
/// still current. A newer trigger bumps the counter, so an older in-flight
/// pass that completes late is discarded rather than overwriting fresher
/// state.
pub(crate) struct EngineShared {
    identity_tx: watch::Sender<TenantIdentity>,
    attempt: AtomicU64,
}

impl EngineShared {
    pub(crate) fn new(identity_tx: watch::Sender<TenantIdentity>) -> Self {
        Self {
            identity_tx,
            attempt: AtomicU64::new(0),
        }
    }

    pub(crate) fn begin(&self) -> u64 {
        self.attempt.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn invalidate(&self) {
        self.attempt.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn publish_if_current(&self, ticket: u64, identity: TenantIdentity) -> bool {
        if self.attempt.load(Ordering::SeqCst) == ticket {
            self.identity_tx.send_replace(identity);
            true
        } else {
            log::debug!("Discarding stale resolution (ticket {})", ticket);
            false
        }
    }

    pub(crate) fn publish(&self, identity: TenantIdentity) {
        self.identity_tx.send_replace(identity);
    }

    pub(crate) fn snapshot(&self) -> TenantIdentity {
        self.identity_tx.borrow().clone()
    }
}

/// Owns the `TenantIdentity` state machine: awaiting-session, resolving,
/// resolved, and the reset on sign-out.
///
/// Auth-event and notifier handlers only enqueue resolution requests onto an
/// internal queue; resolution never runs inside the delivery of an event.
pub struct TenantIdentityEngine {
    refresh_tx: mpsc::Sender<RefreshRequest>,
    identity_rx: watch::Receiver<TenantIdentity>,
    settle_delay: Duration,
    // Keeps the notifier channel open for the lifetime of the engine.
    _notifier: ImpersonationNotifier,
    worker: JoinHandle<()>,
    event_loop: JoinHandle<()>,
}

impl TenantIdentityEngine {
    pub fn start(
        provider: Arc<dyn SessionProvider>,
        notifier: ImpersonationNotifier,
        pool: SqlitePool,
        claims_extractor: ClaimsExtractor,
        domain_hints: DomainHintExtractor,
        config: EngineConfig,
    ) -> Self {
        let (identity_tx, identity_rx) = watch::channel(TenantIdentity::quiescent());
        let shared = Arc::new(EngineShared::new(identity_tx));
        let (refresh_tx, refresh_rx) = mpsc::channel(16);

        let resolver = Resolver::new(pool, claims_extractor, domain_hints, &config);

        let worker = tokio::spawn(worker_loop(
            Arc::clone(&shared),
            Arc::clone(&provider),
            resolver,
            refresh_rx,
        ));

        let event_loop = tokio::spawn(event_loop(
            Arc::clone(&shared),
            provider.subscribe(),
            notifier.subscribe(),
            refresh_tx.clone(),
            config.settle_delay,
        ));

        // Initial pass on mount. With no live session the worker publishes
        // the quiescent shape without touching the database.
        let initial = refresh_tx.clone();
        tokio::spawn(async move {
            let _ = initial.send(RefreshRequest { done: None }).await;
        });

        Self {
            refresh_tx,
            identity_rx,
            settle_delay: config.settle_delay,
            _notifier: notifier,
            worker,
            event_loop,
        }
    }

    /// Current snapshot; always defined, never fails.
    pub fn identity(&self) -> TenantIdentity {
        self.identity_rx.borrow().clone()
    }

    /// Watch for identity changes.
    pub fn subscribe(&self) -> watch::Receiver<TenantIdentity> {
        self.identity_rx.clone()
    }

    /// Manual re-resolution, e.g. after a settings change. Completes when
    /// the pass has run and either published or been superseded.
    pub async fn force_refresh(&self) -> EngineResult<()> {
        let (done_tx, done_rx) = oneshot::channel();

        self.refresh_tx
            .send(RefreshRequest {
                done: Some(done_tx),
            })
            .await
            .map_err(|_| EngineError::Stopped {
                message: "refresh queue closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        done_rx.await.map_err(|_| EngineError::Stopped {
            message: "refresh dropped before completion".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Re-resolution after an impersonation change: waits the settling
    /// interval so the originating write can commit, then refreshes.
    pub async fn refresh_after_impersonation_change(&self) -> EngineResult<()> {
        tokio::time::sleep(self.settle_delay).await;
        self.force_refresh().await
    }
}

impl Drop for TenantIdentityEngine {
    fn drop(&mut self) {
        self.worker.abort();
        self.event_loop.abort();
    }
}

async fn worker_loop(
    shared: Arc<EngineShared>,
    provider: Arc<dyn SessionProvider>,
    resolver: Resolver,
    mut refresh_rx: mpsc::Receiver<RefreshRequest>,
) {
    while let Some(request) = refresh_rx.recv().await {
        let ticket = shared.begin();

        match provider.current_session().await {
            Some(session) => {
                shared.publish_if_current(ticket, TenantIdentity::resolving(&shared.snapshot()));
                run_pass(&shared, &resolver, &session, ticket).await;
            }
            None => {
                // No session: quiescent, no queries, no misleading error.
                shared.publish_if_current(ticket, TenantIdentity::quiescent());
            }
        }

        if let Some(done) = request.done {
            let _ = done.send(());
        }
    }
}

async fn run_pass(shared: &EngineShared, resolver: &Resolver, session: &Session, ticket: u64) {
    let identity = resolver.resolve(session).await;

    if shared.publish_if_current(ticket, identity) {
        log::debug!("Published tenant identity (ticket {})", ticket);
    }
}

async fn event_loop(
    shared: Arc<EngineShared>,
    mut events: broadcast::Receiver<AuthEvent>,
    mut notifications: broadcast::Receiver<()>,
    refresh_tx: mpsc::Sender<RefreshRequest>,
    settle_delay: Duration,
) {
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(AuthEvent::SignedOut) => {
                    // Reset immediately and invalidate any in-flight pass so
                    // a late completion cannot resurrect the old identity.
                    shared.invalidate();
                    shared.publish(TenantIdentity::quiescent());
                    log::info!("Signed out, tenant identity reset");
                }
                Ok(event) => {
                    log::debug!("Auth event {:?}, scheduling re-resolution", event);
                    enqueue(&refresh_tx);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    log::warn!("Missed {} auth events, re-resolving", skipped);
                    enqueue(&refresh_tx);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            note = notifications.recv() => match note {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                    // The override record is written by a separate
                    // transaction; give it the settling interval to commit.
                    let delayed = refresh_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(settle_delay).await;
                        enqueue(&delayed);
                    });
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
        }
    }
}

/// Handlers only enqueue; a full queue already guarantees a pending pass
/// that will observe the latest state.
fn enqueue(refresh_tx: &mpsc::Sender<RefreshRequest>) {
    if let Err(e) = refresh_tx.try_send(RefreshRequest { done: None }) {
        log::debug!("Refresh already pending: {}", e);
    }
}
