use crate::DEFAULT_ADMIN_HOST_PREFIX;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret for decoding session tokens
    pub jwt_secret: Option<String>,
    /// Exact hostnames reserved for superadmin-only access
    pub admin_hosts: Vec<String>,
    /// First host label treated as the administrative domain
    pub admin_host_prefix: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            admin_hosts: Vec::new(),
            admin_host_prefix: String::from(DEFAULT_ADMIN_HOST_PREFIX),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> crate::ConfigErrorResult<()> {
        if let Some(secret) = &self.jwt_secret
            && secret.len() < 32
        {
            return Err(crate::ConfigError::auth(
                "auth.jwt_secret must be at least 32 bytes",
            ));
        }
        Ok(())
    }
}
