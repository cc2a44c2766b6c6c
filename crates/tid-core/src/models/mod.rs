pub mod admin_override;
pub mod auth_event;
pub mod company;
pub mod company_id;
pub mod company_role;
pub mod identity_error;
pub mod impersonation_session;
pub mod session_claims;
pub mod tenant_identity;
pub mod tenant_session;
