use crate::CompanyId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A live record marking that a superadmin is acting on behalf of a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpersonationSession {
    pub id: Uuid,
    pub superadmin_id: Uuid,
    pub target_tenant_id: CompanyId,
    pub status: ImpersonationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpersonationStatus {
    Active,
    Ended,
}

impl ImpersonationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Ended => "ended",
        }
    }
}
