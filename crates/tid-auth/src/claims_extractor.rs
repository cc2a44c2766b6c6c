use crate::JwtValidator;

use std::str::FromStr;

use tid_core::{CompanyId, SessionClaims};

/// Turns a raw session token into [`SessionClaims`] without ever failing the
/// caller.
///
/// A malformed or expired token degrades to [`SessionClaims::absent`] with a
/// logged diagnostic; resolution then proceeds through the remaining tiers
/// rather than aborting. Pure and synchronous, no I/O.
pub struct ClaimsExtractor {
    validator: JwtValidator,
}

impl ClaimsExtractor {
    pub fn new(validator: JwtValidator) -> Self {
        Self { validator }
    }

    pub fn extract(&self, token: &str) -> SessionClaims {
        let claims = match self.validator.validate(token) {
            Ok(claims) => claims,
            Err(e) => {
                log::warn!("Token claims unusable, degrading to absent: {}", e);
                return SessionClaims::absent();
            }
        };

        let company_id = match claims.company_id.as_deref() {
            Some(raw) => match CompanyId::from_str(raw) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("Ignoring malformed company_id claim: {}", e);
                    None
                }
            },
            None => None,
        };

        SessionClaims {
            company_id,
            role: claims.role,
            is_super_admin: claims.is_super_admin,
        }
    }
}
