use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims structure - matches the platform token format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Company bound at token issuance, absent for superadmins
    #[serde(default)]
    pub company_id: Option<String>,
    /// Optional: role embedded at issuance
    #[serde(default)]
    pub role: Option<String>,
    /// Superadmin flag; stale relative to later role grants/revocations
    #[serde(default)]
    pub is_super_admin: bool,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(company_id) = &self.company_id {
            if company_id.is_empty() {
                return Err(AuthError::InvalidClaim {
                    claim: "company_id".to_string(),
                    message: "company_id cannot be empty when present".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if company_id.len() > 128 {
                return Err(AuthError::InvalidClaim {
                    claim: "company_id".to_string(),
                    message: "company_id exceeds maximum length".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }
}
