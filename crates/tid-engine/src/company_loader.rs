use sqlx::SqlitePool;
use tid_core::{Company, CompanyId};
use tid_db::CompanyRepository;

/// Pure request/response fetch of company records, active companies only.
/// Branding side effects belong to the consumer, not here.
pub struct CompanyLoader {
    companies: CompanyRepository,
}

impl CompanyLoader {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            companies: CompanyRepository::new(pool),
        }
    }

    /// `None` means no active company exists under this id, including the
    /// dangling-reference case the caller must surface as an error.
    pub async fn load(&self, id: CompanyId) -> Option<Company> {
        match self.companies.find_active_by_id(id).await {
            Ok(company) => company,
            Err(e) => {
                log::warn!("Company load failed for {}: {}", id, e);
                None
            }
        }
    }

    /// Resolve a URL slug to an active company: exact slug match first, then
    /// a case-insensitive partial match on display name as a legacy fallback.
    pub async fn resolve_slug(&self, slug: &str) -> Option<Company> {
        match self.companies.find_active_by_slug(slug).await {
            Ok(Some(company)) => return Some(company),
            Ok(None) => {}
            Err(e) => log::warn!("Slug lookup failed for {:?}: {}", slug, e),
        }

        match self.companies.find_active_by_name_like(slug).await {
            Ok(company) => company,
            Err(e) => {
                log::warn!("Name-fallback lookup failed for {:?}: {}", slug, e);
                None
            }
        }
    }
}
