use crate::CompanyId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A manually-initiated, longer-lived binding of an administrator to one
/// tenant, independent of impersonation ("tunnel").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tenant_company_id: CompanyId,
    pub is_tenant_mode: bool,
    pub updated_at: DateTime<Utc>,
}

impl TenantSession {
    pub fn new(user_id: Uuid, tenant_company_id: CompanyId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            tenant_company_id,
            is_tenant_mode: true,
            updated_at: Utc::now(),
        }
    }
}
