pub mod claims;
pub mod claims_extractor;
pub mod domain_hint;
pub mod domain_hint_extractor;
pub mod error;
pub mod jwt_validator;

pub use claims::Claims;
pub use claims_extractor::ClaimsExtractor;
pub use domain_hint::DomainHint;
pub use domain_hint_extractor::DomainHintExtractor;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
