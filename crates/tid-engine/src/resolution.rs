//! One full resolution pass: session token to published-ready identity.

use crate::{CompanyLoader, EngineConfig, OverrideResolver, Selection, SelectionSource, Session, decide};

use sqlx::SqlitePool;
use tid_auth::{ClaimsExtractor, DomainHintExtractor};
use tid_core::{Company, TenantIdentity};
use tid_db::TenantSessionRepository;

/// Computes a complete [`TenantIdentity`] for a session. The result is built
/// in full before the caller publishes it, so no torn state is observable.
pub struct Resolver {
    claims_extractor: ClaimsExtractor,
    domain_hints: DomainHintExtractor,
    overrides: OverrideResolver,
    loader: CompanyLoader,
    pool: SqlitePool,
    origin: String,
    write_session_marker: bool,
}

impl Resolver {
    pub fn new(
        pool: SqlitePool,
        claims_extractor: ClaimsExtractor,
        domain_hints: DomainHintExtractor,
        config: &EngineConfig,
    ) -> Self {
        Self {
            claims_extractor,
            domain_hints,
            overrides: OverrideResolver::new(pool.clone()),
            loader: CompanyLoader::new(pool.clone()),
            pool,
            origin: config.origin.clone(),
            write_session_marker: config.write_session_marker,
        }
    }

    pub async fn resolve(&self, session: &Session) -> TenantIdentity {
        let claims = self.claims_extractor.extract(&session.access_token);
        let hint = self.domain_hints.extract(&self.origin);

        let is_administrator = self
            .overrides
            .verify_administrator(&claims, session.user_id)
            .await;

        // Override lookups are never attempted for ordinary users.
        let admin_override = if is_administrator {
            self.overrides.resolve(session.user_id).await
        } else {
            None
        };

        match decide(&claims, admin_override.as_ref(), &hint, is_administrator) {
            Selection::Company { id, source } => match self.loader.load(id).await {
                Some(company) => {
                    self.bind(session, company, source == SelectionSource::Claims)
                }
                // A selected-but-dangling id usually means a deactivated or
                // deleted tenant; surface it instead of masking it.
                None => TenantIdentity::unavailable(id),
            },
            Selection::SlugLookup { slug } => match self.loader.resolve_slug(&slug).await {
                Some(company) => self.bind(session, company, false),
                None => TenantIdentity::super_admin(),
            },
            Selection::SuperAdmin => TenantIdentity::super_admin(),
        }
    }

    /// Bind a company and kick off the best-effort session marker write.
    /// The write runs detached; its failure is logged and never reaches the
    /// published identity.
    fn bind(
        &self,
        session: &Session,
        company: Company,
        using_claims_source: bool,
    ) -> TenantIdentity {
        if self.write_session_marker {
            let markers = TenantSessionRepository::new(self.pool.clone());
            let user_id = session.user_id;
            let company_id = company.id;
            tokio::spawn(async move {
                if let Err(e) = markers.upsert_marker(user_id, company_id).await {
                    log::warn!("Session marker write failed (ignored): {}", e);
                }
            });
        }

        TenantIdentity::bound(company, using_claims_source)
    }
}
