pub mod company_repository;
pub mod company_role_repository;
pub mod impersonation_session_repository;
pub mod tenant_session_repository;
