//! Priority search over the administrator override records.

use sqlx::SqlitePool;
use tid_core::{AdminOverride, SessionClaims};
use tid_db::{CompanyRoleRepository, ImpersonationSessionRepository, TenantSessionRepository};
use uuid::Uuid;

/// Finds an administrator's effective company independent of the token.
///
/// Each tier's query failure is treated as "not found" at that tier and the
/// search proceeds; a total miss yields `None`, which maps to superadmin
/// mode. Superadmin fallback is always a safe landing, so this resolver is
/// infallible by construction.
pub struct OverrideResolver {
    impersonations: ImpersonationSessionRepository,
    tunnels: TenantSessionRepository,
    roles: CompanyRoleRepository,
}

impl OverrideResolver {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            impersonations: ImpersonationSessionRepository::new(pool.clone()),
            tunnels: TenantSessionRepository::new(pool.clone()),
            roles: CompanyRoleRepository::new(pool),
        }
    }

    /// Re-verify administrator status against the database, in addition to
    /// trusting the claim. Claims may predate a role grant or revocation;
    /// administrator status gates which override records are even consulted,
    /// so it is the one fact checked on every resolution.
    pub async fn verify_administrator(&self, claims: &SessionClaims, user_id: Uuid) -> bool {
        let db_admin = match self.roles.has_admin_role(user_id).await {
            Ok(db_admin) => db_admin,
            Err(e) => {
                log::warn!("Administrator role check failed, trusting claims only: {}", e);
                false
            }
        };

        claims.is_super_admin || db_admin
    }

    /// First match in strict order: active impersonation, then tenant-mode
    /// tunnel, then the administrator's own first company role.
    pub async fn resolve(&self, user_id: Uuid) -> Option<AdminOverride> {
        match self.impersonations.find_active_by_superadmin(user_id).await {
            Ok(Some(session)) => {
                log::debug!(
                    "Override for {}: impersonating company {}",
                    user_id,
                    session.target_tenant_id
                );
                return Some(AdminOverride::Impersonation {
                    company_id: session.target_tenant_id,
                });
            }
            Ok(None) => {}
            Err(e) => log::warn!("Impersonation lookup failed, trying next tier: {}", e),
        }

        match self.tunnels.find_tenant_mode_by_user(user_id).await {
            Ok(Some(session)) => {
                log::debug!(
                    "Override for {}: tunneled into company {}",
                    user_id,
                    session.tenant_company_id
                );
                return Some(AdminOverride::TenantTunnel {
                    company_id: session.tenant_company_id,
                });
            }
            Ok(None) => {}
            Err(e) => log::warn!("Tenant session lookup failed, trying next tier: {}", e),
        }

        match self.roles.find_first_company_for_user(user_id).await {
            Ok(Some(company_id)) => {
                log::debug!("Override for {}: own company {}", user_id, company_id);
                Some(AdminOverride::OwnCompany { company_id })
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Company role lookup failed, no company bound: {}", e);
                None
            }
        }
    }
}
