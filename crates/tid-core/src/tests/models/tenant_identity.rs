use crate::{Company, CompanyId, IdentityError, TenantIdentity};

fn acme() -> Company {
    Company::new("Acme Corp".to_string(), "acme".to_string())
}

#[test]
fn test_quiescent_has_no_company_and_no_error() {
    let identity = TenantIdentity::quiescent();

    assert!(identity.resolved_company_id.is_none());
    assert!(identity.company.is_none());
    assert!(identity.is_super_admin_mode);
    assert!(identity.error.is_none());
    assert!(!identity.is_resolving);
}

#[test]
fn test_bound_sets_exactly_one_of_company_or_super_admin() {
    let company = acme();
    let id = company.id;
    let identity = TenantIdentity::bound(company, true);

    assert_eq!(identity.resolved_company_id, Some(id));
    assert!(!identity.is_super_admin_mode);
    assert!(identity.using_claims_source);
    assert!(identity.error.is_none());
}

#[test]
fn test_super_admin_sets_neither_company_nor_error() {
    let identity = TenantIdentity::super_admin();

    assert!(identity.resolved_company_id.is_none());
    assert!(identity.is_super_admin_mode);
    assert!(identity.error.is_none());
}

#[test]
fn test_unavailable_surfaces_error_without_super_admin_mode() {
    let company_id = CompanyId::new_v4();
    let identity = TenantIdentity::unavailable(company_id);

    assert!(identity.resolved_company_id.is_none());
    assert!(!identity.is_super_admin_mode);
    assert_eq!(
        identity.error,
        Some(IdentityError::CompanyUnavailable { company_id })
    );
}

#[test]
fn test_resolving_preserves_previous_answer() {
    let company = acme();
    let id = company.id;
    let previous = TenantIdentity::bound(company, false);

    let identity = TenantIdentity::resolving(&previous);

    assert!(identity.is_resolving);
    assert_eq!(identity.resolved_company_id, Some(id));
}
