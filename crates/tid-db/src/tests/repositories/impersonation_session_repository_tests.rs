use super::setup_db;
use crate::ImpersonationSessionRepository;

use chrono::{Duration, Utc};
use tid_core::{CompanyId, ImpersonationSession, ImpersonationStatus};
use uuid::Uuid;

fn session(superadmin_id: Uuid, status: ImpersonationStatus) -> ImpersonationSession {
    ImpersonationSession {
        id: Uuid::new_v4(),
        superadmin_id,
        target_tenant_id: CompanyId::new_v4(),
        status,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn given_active_session_when_looked_up_then_returned() {
    let pool = setup_db().await;
    let repo = ImpersonationSessionRepository::new(pool);
    let superadmin_id = Uuid::new_v4();
    let active = session(superadmin_id, ImpersonationStatus::Active);
    repo.create(&active).await.unwrap();

    let found = repo
        .find_active_by_superadmin(superadmin_id)
        .await
        .unwrap()
        .expect("active session should be found");

    assert_eq!(found.target_tenant_id, active.target_tenant_id);
    assert_eq!(found.status, ImpersonationStatus::Active);
}

#[tokio::test]
async fn given_only_ended_sessions_when_looked_up_then_none() {
    let pool = setup_db().await;
    let repo = ImpersonationSessionRepository::new(pool);
    let superadmin_id = Uuid::new_v4();
    repo.create(&session(superadmin_id, ImpersonationStatus::Ended))
        .await
        .unwrap();

    let found = repo.find_active_by_superadmin(superadmin_id).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn given_two_active_sessions_when_looked_up_then_newest_wins() {
    let pool = setup_db().await;
    let repo = ImpersonationSessionRepository::new(pool);
    let superadmin_id = Uuid::new_v4();

    let mut older = session(superadmin_id, ImpersonationStatus::Active);
    older.created_at = Utc::now() - Duration::hours(1);
    let newer = session(superadmin_id, ImpersonationStatus::Active);
    repo.create(&older).await.unwrap();
    repo.create(&newer).await.unwrap();

    let found = repo
        .find_active_by_superadmin(superadmin_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.target_tenant_id, newer.target_tenant_id);
}

#[tokio::test]
async fn given_sessions_when_ended_for_superadmin_then_lookup_is_empty() {
    let pool = setup_db().await;
    let repo = ImpersonationSessionRepository::new(pool);
    let superadmin_id = Uuid::new_v4();
    repo.create(&session(superadmin_id, ImpersonationStatus::Active))
        .await
        .unwrap();

    let ended = repo.end_all_for_superadmin(superadmin_id).await.unwrap();

    assert_eq!(ended, 1);
    assert!(
        repo.find_active_by_superadmin(superadmin_id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn given_other_superadmins_session_when_looked_up_then_not_returned() {
    let pool = setup_db().await;
    let repo = ImpersonationSessionRepository::new(pool);
    repo.create(&session(Uuid::new_v4(), ImpersonationStatus::Active))
        .await
        .unwrap();

    let found = repo.find_active_by_superadmin(Uuid::new_v4()).await.unwrap();

    assert!(found.is_none());
}
