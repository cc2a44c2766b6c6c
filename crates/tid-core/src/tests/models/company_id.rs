use crate::{CompanyId, CoreError};

use std::str::FromStr;

use uuid::Uuid;

#[test]
fn test_company_id_round_trips_through_display() {
    let id = CompanyId::new_v4();
    let parsed = CompanyId::from_str(&id.to_string()).unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn test_company_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = CompanyId::from(uuid);

    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn test_invalid_company_id_is_rejected() {
    let result = CompanyId::from_str("not-a-uuid");

    assert!(matches!(result, Err(CoreError::InvalidCompanyId { .. })));
}
