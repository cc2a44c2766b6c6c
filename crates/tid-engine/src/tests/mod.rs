
use crate::{EngineConfig, ImpersonationNotifier, Session, SessionProvider, TenantIdentityEngine};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::{SqlitePool, migrate};
use tid_auth::{Claims, ClaimsExtractor, DomainHintExtractor, JwtValidator};
use tid_core::{AuthEvent, CompanyId, TenantIdentity};
use tokio::sync::{RwLock, broadcast, watch};
use uuid::Uuid;

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) async fn setup_db() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    migrate!("../tid-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub(crate) fn token_for(user_id: Uuid, company_id: Option<CompanyId>, is_super_admin: bool) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
        company_id: company_id.map(|id| id.to_string()),
        role: None,
        is_super_admin,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

pub(crate) struct TestSessionProvider {
    session: RwLock<Option<Session>>,
    events: broadcast::Sender<AuthEvent>,
}

impl TestSessionProvider {
    pub(crate) fn new(session: Option<Session>) -> Arc<Self> {
        let (events, _) = broadcast::channel(8);
        Arc::new(Self {
            session: RwLock::new(session),
            events,
        })
    }

    pub(crate) async fn set_session(&self, session: Option<Session>) {
        *self.session.write().await = session;
    }

    pub(crate) fn emit(&self, event: AuthEvent) {
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl SessionProvider for TestSessionProvider {
    async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

pub(crate) fn start_engine(
    provider: Arc<TestSessionProvider>,
    pool: SqlitePool,
    origin: &str,
) -> (TenantIdentityEngine, ImpersonationNotifier) {
    let notifier = ImpersonationNotifier::new();
    let claims_extractor = ClaimsExtractor::new(JwtValidator::with_hs256(SECRET));
    let domain_hints = DomainHintExtractor::new(Vec::new(), "admin".to_string());
    let config = EngineConfig {
        origin: origin.to_string(),
        settle_delay: Duration::from_millis(50),
        write_session_marker: true,
    };

    let engine = TenantIdentityEngine::start(
        provider,
        notifier.clone(),
        pool,
        claims_extractor,
        domain_hints,
        config,
    );

    (engine, notifier)
}

/// Wait until the published identity satisfies the predicate.
pub(crate) async fn wait_for<F>(
    rx: &mut watch::Receiver<TenantIdentity>,
    predicate: F,
) -> TenantIdentity
where
    F: Fn(&TenantIdentity) -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let identity = rx.borrow().clone();
                if predicate(&identity) {
                    return identity;
                }
            }
            rx.changed().await.expect("identity channel closed");
        }
    })
    .await
    .expect("timed out waiting for identity")
}
