use super::setup_db;
use crate::TenantSessionRepository;

use tid_core::{CompanyId, TenantSession};
use uuid::Uuid;

#[tokio::test]
async fn given_tenant_mode_session_when_looked_up_then_returned() {
    let pool = setup_db().await;
    let repo = TenantSessionRepository::new(pool);
    let user_id = Uuid::new_v4();
    let tunnel = TenantSession::new(user_id, CompanyId::new_v4());
    repo.create(&tunnel).await.unwrap();

    let found = repo
        .find_tenant_mode_by_user(user_id)
        .await
        .unwrap()
        .expect("tunnel should be found");

    assert_eq!(found.tenant_company_id, tunnel.tenant_company_id);
    assert!(found.is_tenant_mode);
}

#[tokio::test]
async fn given_session_without_tenant_mode_when_looked_up_then_none() {
    let pool = setup_db().await;
    let repo = TenantSessionRepository::new(pool);
    let user_id = Uuid::new_v4();
    let mut marker = TenantSession::new(user_id, CompanyId::new_v4());
    marker.is_tenant_mode = false;
    repo.create(&marker).await.unwrap();

    let found = repo.find_tenant_mode_by_user(user_id).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn given_no_row_when_marker_upserted_then_row_created_without_tenant_mode() {
    let pool = setup_db().await;
    let repo = TenantSessionRepository::new(pool);
    let user_id = Uuid::new_v4();
    let company_id = CompanyId::new_v4();

    repo.upsert_marker(user_id, company_id).await.unwrap();

    // Marker rows never flip the user into tenant mode.
    assert!(repo.find_tenant_mode_by_user(user_id).await.unwrap().is_none());
}

#[tokio::test]
async fn given_existing_row_when_marker_upserted_then_company_updated_in_place() {
    let pool = setup_db().await;
    let repo = TenantSessionRepository::new(pool);
    let user_id = Uuid::new_v4();
    let tunnel = TenantSession::new(user_id, CompanyId::new_v4());
    repo.create(&tunnel).await.unwrap();
    let new_company = CompanyId::new_v4();

    repo.upsert_marker(user_id, new_company).await.unwrap();

    let found = repo
        .find_tenant_mode_by_user(user_id)
        .await
        .unwrap()
        .expect("tunnel row should survive the marker upsert");
    assert_eq!(found.tenant_company_id, new_company);
}
