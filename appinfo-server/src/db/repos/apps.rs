//! AppInfo repository
//!
//! One table, five operations. Uniqueness of `app_name` and `sonar_key`
//! is enforced by the database; violations surface as `DbError::Conflict`.

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

/// AppInfo record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AppInfo {
    pub id: i32,
    pub app_name: String,
    pub created_on: NaiveDateTime,
    pub last_deployed_on: NaiveDateTime,
    pub sonar_key: String,
    pub code_quality: String,
    pub code_coverage: String,
    pub is_active: bool,
}

/// Fields for a new record; `id` is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewApp {
    pub app_name: String,
    pub created_on: NaiveDateTime,
    pub last_deployed_on: NaiveDateTime,
    pub sonar_key: String,
    pub code_quality: String,
    pub code_coverage: String,
    pub is_active: bool,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Map unique-constraint violations to Conflict, everything else to Sqlx.
fn map_constraint_err(e: sqlx::Error) -> DbError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => DbError::Conflict(db.message().to_owned()),
        _ => DbError::Sqlx(e),
    }
}

/// AppInfo repository
pub struct AppRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AppRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every record in storage order. No pagination.
    pub async fn list(&self) -> Result<Vec<AppInfo>, DbError> {
        let rows = sqlx::query_as::<_, AppInfo>(
            r#"
            SELECT id, app_name, created_on, last_deployed_on,
                   sonar_key, code_quality, code_coverage, is_active
            FROM app_info
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single record by id.
    pub async fn get(&self, id: i32) -> Result<AppInfo, DbError> {
        sqlx::query_as::<_, AppInfo>(
            r#"
            SELECT id, app_name, created_on, last_deployed_on,
                   sonar_key, code_quality, code_coverage, is_active
            FROM app_info
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "app",
            id: id.to_string(),
        })
    }

    /// Insert a new record, returning it with the assigned id.
    pub async fn insert(&self, new: NewApp) -> Result<AppInfo, DbError> {
        sqlx::query_as::<_, AppInfo>(
            r#"
            INSERT INTO app_info
                (app_name, created_on, last_deployed_on,
                 sonar_key, code_quality, code_coverage, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, app_name, created_on, last_deployed_on,
                      sonar_key, code_quality, code_coverage, is_active
            "#,
        )
        .bind(&new.app_name)
        .bind(new.created_on)
        .bind(new.last_deployed_on)
        .bind(&new.sonar_key)
        .bind(&new.code_quality)
        .bind(&new.code_coverage)
        .bind(new.is_active)
        .fetch_one(self.pool)
        .await
        .map_err(map_constraint_err)
    }

    /// Update `sonar_key` and `code_quality` for the row matching id.
    ///
    /// Only these two fields are persisted; the rest of the record is
    /// left untouched. A missing id is a silent no-op.
    pub async fn update(
        &self,
        id: i32,
        sonar_key: &str,
        code_quality: &str,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            UPDATE app_info
            SET sonar_key = $2, code_quality = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(sonar_key)
        .bind(code_quality)
        .execute(self.pool)
        .await
        .map_err(map_constraint_err)?;

        Ok(())
    }

    /// Hard-delete the row matching id. A missing id is a silent no-op.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM app_info WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
