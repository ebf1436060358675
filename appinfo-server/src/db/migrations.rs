//! Schema creation for the app_info table
//!
//! Runs once at startup. CREATE TABLE IF NOT EXISTS makes it safe to
//! run on every start.

use sqlx::PgPool;

/// Create the app_info table if it does not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring app_info schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS app_info (
            id SERIAL PRIMARY KEY,
            app_name VARCHAR(80) NOT NULL UNIQUE,
            created_on TIMESTAMP NOT NULL,
            last_deployed_on TIMESTAMP NOT NULL,
            sonar_key VARCHAR(80) NOT NULL UNIQUE,
            code_quality VARCHAR(5) NOT NULL,
            code_coverage VARCHAR(5) NOT NULL,
            is_active BOOLEAN NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema ready");
    Ok(())
}
