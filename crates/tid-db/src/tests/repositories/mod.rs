mod company_repository_tests;
mod company_role_repository_tests;
mod impersonation_session_repository_tests;
mod tenant_session_repository_tests;

use sqlx::{SqlitePool, migrate};

pub(crate) async fn setup_db() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
