use crate::CompanyId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A role grant binding a user to a company.
///
/// `company_id` is nullable: superadmins typically hold a role with no
/// company bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRole {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Option<CompanyId>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl CompanyRole {
    pub fn new(user_id: Uuid, company_id: Option<CompanyId>, role: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            company_id,
            role: role.to_string(),
            created_at: Utc::now(),
        }
    }
}
