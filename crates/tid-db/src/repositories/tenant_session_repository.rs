use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tid_core::{CompanyId, ErrorLocation, TenantSession};
use uuid::Uuid;

pub struct TenantSessionRepository {
    pool: SqlitePool,
}

impl TenantSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Second-priority override source: a manual tunnel into a company.
    pub async fn find_tenant_mode_by_user(
        &self,
        user_id: Uuid,
    ) -> DbErrorResult<Option<TenantSession>> {
        let user_id_str = user_id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, user_id, tenant_company_id, is_tenant_mode, updated_at
                FROM tenant_sessions
                WHERE user_id = ? AND is_tenant_mode = 1
                "#,
        )
        .bind(user_id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_session).transpose()
    }

    /// Best-effort marker write after a successful resolution. One row per
    /// user; the marker does not switch the user into tenant mode.
    pub async fn upsert_marker(
        &self,
        user_id: Uuid,
        company_id: CompanyId,
    ) -> DbErrorResult<()> {
        let id_str = Uuid::new_v4().to_string();
        let user_id_str = user_id.to_string();
        let company_id_str = company_id.to_string();
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO tenant_sessions
                  (id, user_id, tenant_company_id, is_tenant_mode, updated_at)
              VALUES (?, ?, ?, 0, ?)
              ON CONFLICT(user_id) DO UPDATE SET
                  tenant_company_id = excluded.tenant_company_id,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(id_str)
        .bind(user_id_str)
        .bind(company_id_str)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn create(&self, session: &TenantSession) -> DbErrorResult<()> {
        let id_str = session.id.to_string();
        let user_id_str = session.user_id.to_string();
        let company_id_str = session.tenant_company_id.to_string();
        let updated_at = session.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO tenant_sessions
                  (id, user_id, tenant_company_id, is_tenant_mode, updated_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(id_str)
        .bind(user_id_str)
        .bind(company_id_str)
        .bind(session.is_tenant_mode)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[track_caller]
fn map_session(row: SqliteRow) -> DbErrorResult<TenantSession> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let tenant_company_id: String = row.try_get("tenant_company_id")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(TenantSession {
        id: Uuid::parse_str(&id).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid UUID in tenant_session.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        user_id: Uuid::parse_str(&user_id).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid UUID in tenant_session.user_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        tenant_company_id: CompanyId::from_str(&tenant_company_id).map_err(|e| {
            DbError::CorruptRow {
                message: format!(
                    "Invalid UUID in tenant_session.tenant_company_id: {}",
                    e
                ),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        is_tenant_mode: row.try_get("is_tenant_mode")?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::CorruptRow {
                message: "Invalid timestamp in tenant_session.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
