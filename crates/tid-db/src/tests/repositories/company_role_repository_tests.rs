use super::setup_db;
use crate::CompanyRoleRepository;

use chrono::{Duration, Utc};
use tid_core::{CompanyId, CompanyRole};
use uuid::Uuid;

#[tokio::test]
async fn given_admin_grant_when_checked_then_has_admin_role() {
    let pool = setup_db().await;
    let repo = CompanyRoleRepository::new(pool);
    let user_id = Uuid::new_v4();
    repo.create(&CompanyRole::new(user_id, None, "superadmin"))
        .await
        .unwrap();

    assert!(repo.has_admin_role(user_id).await.unwrap());
}

#[tokio::test]
async fn given_member_grant_when_checked_then_not_admin() {
    let pool = setup_db().await;
    let repo = CompanyRoleRepository::new(pool);
    let user_id = Uuid::new_v4();
    repo.create(&CompanyRole::new(
        user_id,
        Some(CompanyId::new_v4()),
        "member",
    ))
    .await
    .unwrap();

    assert!(!repo.has_admin_role(user_id).await.unwrap());
}

#[tokio::test]
async fn given_no_grants_when_checked_then_not_admin() {
    let pool = setup_db().await;
    let repo = CompanyRoleRepository::new(pool);

    assert!(!repo.has_admin_role(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn given_multiple_grants_when_first_company_fetched_then_oldest_non_null_wins() {
    let pool = setup_db().await;
    let repo = CompanyRoleRepository::new(pool);
    let user_id = Uuid::new_v4();

    let mut null_grant = CompanyRole::new(user_id, None, "superadmin");
    null_grant.created_at = Utc::now() - Duration::days(2);
    let mut oldest = CompanyRole::new(user_id, Some(CompanyId::new_v4()), "admin");
    oldest.created_at = Utc::now() - Duration::days(1);
    let newest = CompanyRole::new(user_id, Some(CompanyId::new_v4()), "admin");

    repo.create(&null_grant).await.unwrap();
    repo.create(&oldest).await.unwrap();
    repo.create(&newest).await.unwrap();

    let found = repo.find_first_company_for_user(user_id).await.unwrap();

    assert_eq!(found, oldest.company_id);
}

#[tokio::test]
async fn given_only_null_company_grants_when_fetched_then_none() {
    let pool = setup_db().await;
    let repo = CompanyRoleRepository::new(pool);
    let user_id = Uuid::new_v4();
    repo.create(&CompanyRole::new(user_id, None, "superadmin"))
        .await
        .unwrap();

    let found = repo.find_first_company_for_user(user_id).await.unwrap();

    assert!(found.is_none());
}
