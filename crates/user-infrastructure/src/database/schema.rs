//! Table bootstrap

use sqlx::PgPool;
use tracing::info;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone_number TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE
    )
"#;

/// Creates the `users` table when it does not exist yet. Safe to run on every start.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    info!("Schema ready: users");
    Ok(())
}
