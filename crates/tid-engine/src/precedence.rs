//! The precedence rule merging claims, database overrides and URL hints.

use tid_auth::DomainHint;
use tid_core::{AdminOverride, CompanyId, SessionClaims};

/// What the precedence rule selected. `SlugLookup` still needs a company
/// lookup; the other variants are final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Company {
        id: CompanyId,
        source: SelectionSource,
    },
    SlugLookup {
        slug: String,
    },
    SuperAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// A live database override record (impersonation, tunnel or own role).
    Override,
    /// The signed token claim.
    Claims,
}

/// Merge the three sources into one selection. Evaluated in order, first
/// match wins. Pure and synchronous; never suspends.
///
/// For administrators the database override always wins over claims: an
/// administrator's token carries no company at issuance, so a company claim
/// on it is stale by definition and must never silently leak through. For
/// ordinary users the signed claim is the trusted source and needs no
/// database corroboration.
pub fn decide(
    claims: &SessionClaims,
    admin_override: Option<&AdminOverride>,
    hint: &DomainHint,
    is_administrator: bool,
) -> Selection {
    if is_administrator
        && let Some(admin_override) = admin_override
    {
        return Selection::Company {
            id: admin_override.company_id(),
            source: SelectionSource::Override,
        };
    }

    if !is_administrator
        && let Some(company_id) = claims.company_id
    {
        return Selection::Company {
            id: company_id,
            source: SelectionSource::Claims,
        };
    }

    if !hint.is_super_admin_domain
        && let Some(slug) = &hint.slug
    {
        return Selection::SlugLookup { slug: slug.clone() };
    }

    // Administrative domain, or nothing usable at all: superadmin mode is
    // the safe default rather than a hard failure.
    Selection::SuperAdmin
}
