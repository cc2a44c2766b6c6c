pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::company_repository::CompanyRepository;
pub use repositories::company_role_repository::CompanyRoleRepository;
pub use repositories::impersonation_session_repository::ImpersonationSessionRepository;
pub use repositories::tenant_session_repository::TenantSessionRepository;

#[cfg(test)]
mod tests;
