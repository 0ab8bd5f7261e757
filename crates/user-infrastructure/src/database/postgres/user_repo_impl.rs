// ============================================================================
// User Infrastructure - PostgreSQL User Repository
// File: crates/user-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};

use user_core::domain::{User, UserFields};
use user_core::error::DomainError;
use user_core::repositories::UserRepository;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            is_active: row.is_active,
        }
    }
}

fn map_db_error(action: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", action, e);
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DomainError::DatabaseUnavailable(e.to_string())
        }
        other => DomainError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, fields: &UserFields) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, phone_number, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone_number, is_active
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.phone_number)
        .bind(fields.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("creating user", e))?;

        debug!("Inserted user row {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone_number, is_active
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding user by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone_number, is_active
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing users", e))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: i32, fields: &UserFields) -> Result<Option<User>, DomainError> {
        // Lookup and write in one statement: an absent id touches nothing.
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            UPDATE users
            SET
                name = $2,
                email = $3,
                phone_number = $4,
                is_active = $5
            WHERE id = $1
            RETURNING id, name, email, phone_number, is_active
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.phone_number)
        .bind(fields.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("updating user", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting user", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("checking connection", e))?;
        Ok(())
    }
}
