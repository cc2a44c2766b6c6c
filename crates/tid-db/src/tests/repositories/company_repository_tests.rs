use super::setup_db;
use crate::CompanyRepository;

use chrono::DateTime;
use tid_core::Company;

fn company(name: &str, slug: &str, is_active: bool) -> Company {
    let mut company = Company::new(name.to_string(), slug.to_string());
    company.is_active = is_active;
    // Storage keeps whole seconds; align so round-trip equality holds.
    company.created_at = DateTime::from_timestamp(company.created_at.timestamp(), 0).unwrap();
    company
}

#[tokio::test]
async fn given_active_company_when_found_by_id_then_returned() {
    let pool = setup_db().await;
    let repo = CompanyRepository::new(pool);
    let acme = company("Acme Corp", "acme", true);
    repo.create(&acme).await.unwrap();

    let found = repo.find_active_by_id(acme.id).await.unwrap();

    assert_eq!(found, Some(acme));
}

#[tokio::test]
async fn given_inactive_company_when_found_by_id_then_none() {
    let pool = setup_db().await;
    let repo = CompanyRepository::new(pool);
    let dormant = company("Dormant Inc", "dormant", false);
    repo.create(&dormant).await.unwrap();

    let found = repo.find_active_by_id(dormant.id).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn given_slug_when_found_then_exact_match_only() {
    let pool = setup_db().await;
    let repo = CompanyRepository::new(pool);
    let acme = company("Acme Corp", "acme", true);
    repo.create(&acme).await.unwrap();

    assert_eq!(repo.find_active_by_slug("acme").await.unwrap(), Some(acme));
    assert!(repo.find_active_by_slug("acm").await.unwrap().is_none());
}

#[tokio::test]
async fn given_name_fragment_when_found_then_case_insensitive_partial_match() {
    let pool = setup_db().await;
    let repo = CompanyRepository::new(pool);
    let acme = company("Acme Corporation", "acme", true);
    repo.create(&acme).await.unwrap();

    let found = repo.find_active_by_name_like("CME CORP").await.unwrap();

    assert_eq!(found, Some(acme));
}

#[tokio::test]
async fn given_inactive_company_when_found_by_slug_then_none() {
    let pool = setup_db().await;
    let repo = CompanyRepository::new(pool);
    let dormant = company("Dormant Inc", "dormant", false);
    repo.create(&dormant).await.unwrap();

    assert!(repo.find_active_by_slug("dormant").await.unwrap().is_none());
    assert!(
        repo.find_active_by_name_like("dormant")
            .await
            .unwrap()
            .is_none()
    );
}
