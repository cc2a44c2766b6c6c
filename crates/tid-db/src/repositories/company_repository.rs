use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tid_core::{Company, CompanyId, ErrorLocation};

pub struct CompanyRepository {
    pool: SqlitePool,
}

impl CompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch a company only if it is active. Inactive companies must never
    /// be bound as the effective tenant.
    pub async fn find_active_by_id(&self, id: CompanyId) -> DbErrorResult<Option<Company>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, name, slug, logo_url, primary_color, secondary_color,
                       is_active, created_at
                FROM companies
                WHERE id = ? AND is_active = 1
                "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_company).transpose()
    }

    /// Exact slug match, active companies only.
    pub async fn find_active_by_slug(&self, slug: &str) -> DbErrorResult<Option<Company>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, slug, logo_url, primary_color, secondary_color,
                       is_active, created_at
                FROM companies
                WHERE slug = ? AND is_active = 1
                "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_company).transpose()
    }

    /// Legacy fallback: case-insensitive partial match on display name.
    pub async fn find_active_by_name_like(
        &self,
        fragment: &str,
    ) -> DbErrorResult<Option<Company>> {
        let pattern = format!("%{}%", fragment.to_lowercase());

        let row = sqlx::query(
            r#"
                SELECT id, name, slug, logo_url, primary_color, secondary_color,
                       is_active, created_at
                FROM companies
                WHERE lower(name) LIKE ? AND is_active = 1
                ORDER BY name
                LIMIT 1
                "#,
        )
        .bind(pattern)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_company).transpose()
    }

    pub async fn create(&self, company: &Company) -> DbErrorResult<()> {
        let id_str = company.id.to_string();
        let created_at = company.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO companies
                  (id, name, slug, logo_url, primary_color, secondary_color,
                   is_active, created_at)
              VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id_str)
        .bind(&company.name)
        .bind(&company.slug)
        .bind(&company.logo_url)
        .bind(&company.primary_color)
        .bind(&company.secondary_color)
        .bind(company.is_active)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[track_caller]
fn map_company(row: SqliteRow) -> DbErrorResult<Company> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Company {
        id: CompanyId::from_str(&id).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid UUID in company.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
        logo_url: row.try_get("logo_url")?,
        primary_color: row.try_get("primary_color")?,
        secondary_color: row.try_get("secondary_color")?,
        is_active: row.try_get("is_active")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::CorruptRow {
                message: "Invalid timestamp in company.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
