pub mod error;
pub mod models;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::admin_override::AdminOverride;
pub use models::auth_event::AuthEvent;
pub use models::company::Company;
pub use models::company_id::CompanyId;
pub use models::company_role::CompanyRole;
pub use models::identity_error::IdentityError;
pub use models::impersonation_session::{ImpersonationSession, ImpersonationStatus};
pub use models::session_claims::SessionClaims;
pub use models::tenant_identity::TenantIdentity;
pub use models::tenant_session::TenantSession;

#[cfg(test)]
mod tests;
