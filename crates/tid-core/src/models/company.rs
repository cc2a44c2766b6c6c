//! Company entity - the tenant unit.

use crate::CompanyId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a tenant company at resolution time.
///
/// An inactive company must never be bound as the effective tenant; the
/// repository layer enforces `is_active` on every binding lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    /// Unique short identifier used in tenant URLs (e.g., "acme")
    pub slug: String,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Create a new active company with default branding
    pub fn new(name: String, slug: String) -> Self {
        Self {
            id: CompanyId::new_v4(),
            name,
            slug,
            logo_url: None,
            primary_color: None,
            secondary_color: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
