use crate::CompanyId;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single user-visible failure class of tenant resolution.
///
/// A company id that was selected by the precedence rules but turned out to
/// be missing or inactive indicates a real data inconsistency (deactivated
/// or deleted tenant with a dangling reference) and must be surfaced, never
/// silently masked as superadmin mode.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityError {
    #[error("Company {company_id} not found or inactive")]
    CompanyUnavailable { company_id: CompanyId },
}
