use crate::Result as DbErrorResult;

use std::str::FromStr;

use sqlx::{Row, SqlitePool};
use tid_core::{CompanyId, CompanyRole};
use uuid::Uuid;

/// Roles that gate the override-record lookups.
const ADMIN_ROLES: [&str; 2] = ["superadmin", "admin"];

pub struct CompanyRoleRepository {
    pool: SqlitePool,
}

impl CompanyRoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Administrator status is re-verified against the database on every
    /// resolution because token claims may predate a grant or revocation.
    pub async fn has_admin_role(&self, user_id: Uuid) -> DbErrorResult<bool> {
        let user_id_str = user_id.to_string();

        let row = sqlx::query(
            r#"
                SELECT COUNT(*) AS n
                FROM company_roles
                WHERE user_id = ? AND role IN (?, ?)
                "#,
        )
        .bind(user_id_str)
        .bind(ADMIN_ROLES[0])
        .bind(ADMIN_ROLES[1])
        .fetch_one(&self.pool)
        .await?;

        let n: i64 = row.try_get("n")?;
        Ok(n > 0)
    }

    /// Lowest-priority override source: the user's first non-null company
    /// grant, oldest first.
    pub async fn find_first_company_for_user(
        &self,
        user_id: Uuid,
    ) -> DbErrorResult<Option<CompanyId>> {
        let user_id_str = user_id.to_string();

        let row = sqlx::query(
            r#"
                SELECT company_id
                FROM company_roles
                WHERE user_id = ? AND company_id IS NOT NULL
                ORDER BY created_at ASC
                LIMIT 1
                "#,
        )
        .bind(user_id_str)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let company_id: String = row.try_get("company_id")?;
                // A malformed grant is skipped rather than fatal; the
                // resolver treats it as no company bound.
                match CompanyId::from_str(&company_id) {
                    Ok(id) => Ok(Some(id)),
                    Err(e) => {
                        log::warn!("Skipping corrupt company_roles.company_id: {}", e);
                        Ok(None)
                    }
                }
            }
            None => Ok(None),
        }
    }

    pub async fn create(&self, grant: &CompanyRole) -> DbErrorResult<()> {
        let id_str = grant.id.to_string();
        let user_id_str = grant.user_id.to_string();
        let company_id_str = grant.company_id.map(|id| id.to_string());
        let created_at = grant.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO company_roles (id, user_id, company_id, role, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(id_str)
        .bind(user_id_str)
        .bind(company_id_str)
        .bind(&grant.role)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
