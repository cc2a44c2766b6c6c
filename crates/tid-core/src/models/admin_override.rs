use crate::CompanyId;

use serde::{Deserialize, Serialize};

/// An administrator's effective company binding found in the database.
///
/// At most one override is effective per administrator at any time. Variants
/// are listed in lookup priority order: an active impersonation beats a
/// manual tunnel, which beats the administrator's own company role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AdminOverride {
    /// Acting as a specific user in a specific tenant.
    Impersonation { company_id: CompanyId },
    /// Manually tunneled into a company.
    TenantTunnel { company_id: CompanyId },
    /// The administrator's own default company via a role grant.
    OwnCompany { company_id: CompanyId },
}

impl AdminOverride {
    pub fn company_id(&self) -> CompanyId {
        match self {
            Self::Impersonation { company_id }
            | Self::TenantTunnel { company_id }
            | Self::OwnCompany { company_id } => *company_id,
        }
    }
}
