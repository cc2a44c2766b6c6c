pub mod company_loader;
pub mod engine_config;
pub mod error;
pub mod impersonation_notifier;
pub mod override_resolver;
pub mod precedence;
pub mod resolution;
pub mod session;
pub mod session_provider;
pub mod tenant_identity_engine;

pub use company_loader::CompanyLoader;
pub use engine_config::EngineConfig;
pub use error::{EngineError, Result};
pub use impersonation_notifier::ImpersonationNotifier;
pub use override_resolver::OverrideResolver;
pub use precedence::{Selection, SelectionSource, decide};
pub use resolution::Resolver;
pub use session::Session;
pub use session_provider::SessionProvider;
pub use tenant_identity_engine::TenantIdentityEngine;

#[cfg(test)]
mod tests;
