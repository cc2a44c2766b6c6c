use crate::{AdminOverride, CompanyId};

#[test]
fn test_company_id_accessor_covers_all_variants() {
    let id = CompanyId::new_v4();

    assert_eq!(
        AdminOverride::Impersonation { company_id: id }.company_id(),
        id
    );
    assert_eq!(
        AdminOverride::TenantTunnel { company_id: id }.company_id(),
        id
    );
    assert_eq!(AdminOverride::OwnCompany { company_id: id }.company_id(), id);
}
