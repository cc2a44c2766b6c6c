//! The published output of tenant resolution.

use crate::{Company, CompanyId, IdentityError};

use serde::{Deserialize, Serialize};

/// The authoritative answer to "which tenant is this session operating
/// under", published atomically by the lifecycle manager.
///
/// Stable states uphold: exactly one of {`resolved_company_id` set,
/// `is_super_admin_mode` true} holds, unless `error` is set, in which case
/// neither holds. The constructors below are the only way resolution code
/// builds this type, so intermediate field combinations are never observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantIdentity {
    pub resolved_company_id: Option<CompanyId>,
    pub company: Option<Company>,
    /// True only when no effective company could or should be bound.
    pub is_super_admin_mode: bool,
    /// Diagnostic: resolution was driven by signed claims rather than a
    /// mutable database override record.
    pub using_claims_source: bool,
    pub error: Option<IdentityError>,
    pub is_resolving: bool,
}

impl TenantIdentity {
    /// No session yet: no tenant, not loading, no error. Resolution is not
    /// attempted without a session.
    pub fn quiescent() -> Self {
        Self {
            resolved_company_id: None,
            company: None,
            is_super_admin_mode: true,
            using_claims_source: false,
            error: None,
            is_resolving: false,
        }
    }

    /// A resolution pass is in flight; the previous answer stays visible.
    pub fn resolving(previous: &Self) -> Self {
        Self {
            is_resolving: true,
            ..previous.clone()
        }
    }

    /// Superadmin mode: cross-tenant context with no company bound.
    pub fn super_admin() -> Self {
        Self {
            resolved_company_id: None,
            company: None,
            is_super_admin_mode: true,
            using_claims_source: false,
            error: None,
            is_resolving: false,
        }
    }

    /// An effective company was bound.
    pub fn bound(company: Company, using_claims_source: bool) -> Self {
        Self {
            resolved_company_id: Some(company.id),
            company: Some(company),
            is_super_admin_mode: false,
            using_claims_source,
            error: None,
            is_resolving: false,
        }
    }

    /// A company id was selected but no active company exists under it.
    pub fn unavailable(company_id: CompanyId) -> Self {
        Self {
            resolved_company_id: None,
            company: None,
            is_super_admin_mode: false,
            using_claims_source: false,
            error: Some(IdentityError::CompanyUnavailable { company_id }),
            is_resolving: false,
        }
    }

    pub fn has_company(&self) -> bool {
        self.resolved_company_id.is_some()
    }
}

impl Default for TenantIdentity {
    fn default() -> Self {
        Self::quiescent()
    }
}
