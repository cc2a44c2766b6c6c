use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tid_core::{CompanyId, ErrorLocation, ImpersonationSession, ImpersonationStatus};
use uuid::Uuid;

pub struct ImpersonationSessionRepository {
    pool: SqlitePool,
}

impl ImpersonationSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The highest-priority override source: an active impersonation for the
    /// given superadmin. Newest record wins if several are active.
    pub async fn find_active_by_superadmin(
        &self,
        superadmin_id: Uuid,
    ) -> DbErrorResult<Option<ImpersonationSession>> {
        let superadmin_id_str = superadmin_id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, superadmin_id, target_tenant_id, status, created_at
                FROM impersonation_sessions
                WHERE superadmin_id = ? AND status = 'active'
                ORDER BY created_at DESC
                LIMIT 1
                "#,
        )
        .bind(superadmin_id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_session).transpose()
    }

    pub async fn create(&self, session: &ImpersonationSession) -> DbErrorResult<()> {
        let id_str = session.id.to_string();
        let superadmin_id_str = session.superadmin_id.to_string();
        let target_str = session.target_tenant_id.to_string();
        let created_at = session.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO impersonation_sessions
                  (id, superadmin_id, target_tenant_id, status, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(id_str)
        .bind(superadmin_id_str)
        .bind(target_str)
        .bind(session.status.as_str())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn end_all_for_superadmin(&self, superadmin_id: Uuid) -> DbErrorResult<u64> {
        let superadmin_id_str = superadmin_id.to_string();

        let result = sqlx::query(
            "UPDATE impersonation_sessions SET status = 'ended' WHERE superadmin_id = ?",
        )
        .bind(superadmin_id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[track_caller]
fn map_session(row: SqliteRow) -> DbErrorResult<ImpersonationSession> {
    let id: String = row.try_get("id")?;
    let superadmin_id: String = row.try_get("superadmin_id")?;
    let target_tenant_id: String = row.try_get("target_tenant_id")?;
    let status: String = row.try_get("status")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(ImpersonationSession {
        id: Uuid::parse_str(&id).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid UUID in impersonation_session.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        superadmin_id: Uuid::parse_str(&superadmin_id).map_err(|e| DbError::CorruptRow {
            message: format!(
                "Invalid UUID in impersonation_session.superadmin_id: {}",
                e
            ),
            location: ErrorLocation::from(Location::caller()),
        })?,
        target_tenant_id: CompanyId::from_str(&target_tenant_id).map_err(|e| {
            DbError::CorruptRow {
                message: format!(
                    "Invalid UUID in impersonation_session.target_tenant_id: {}",
                    e
                ),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        status: match status.as_str() {
            "active" => ImpersonationStatus::Active,
            "ended" => ImpersonationStatus::Ended,
            other => {
                return Err(DbError::CorruptRow {
                    message: format!("Unknown impersonation_session.status: {}", other),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        },
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::CorruptRow {
                message: "Invalid timestamp in impersonation_session.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
