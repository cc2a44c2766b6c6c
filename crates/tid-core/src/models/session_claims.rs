use crate::CompanyId;

use serde::{Deserialize, Serialize};

/// Tenant-relevant facts carried by a signed session token.
///
/// Derived fresh on every resolution pass and never persisted. Trusted as
/// tamper-proof but possibly stale relative to administrator actions taken
/// after token issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub company_id: Option<CompanyId>,
    pub role: Option<String>,
    pub is_super_admin: bool,
}

impl SessionClaims {
    /// The degraded shape used when the token is missing or unparseable.
    pub fn absent() -> Self {
        Self {
            company_id: None,
            role: None,
            is_super_admin: false,
        }
    }
}
