use axum::async_trait;
use sqlx::{FromRow, PgPool};
use time::PrimitiveDateTime;

/// One beta signup row, keyed by email.
#[derive(Debug, Clone, FromRow)]
pub struct SignupRecord {
    pub id: i32,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: PrimitiveDateTime,
}

#[async_trait]
pub trait SignupStore: Send + Sync {
    /// Idempotent create-if-absent of the backing table.
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// Insert or update the record for `email` in a single atomic statement.
    /// A null phone keeps the stored one; `created_at` advances either way.
    async fn upsert(&self, email: &str, phone: Option<&str>) -> anyhow::Result<()>;

    /// Find a signup by email.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<SignupRecord>>;
}

#[derive(Clone)]
pub struct PgSignupStore {
    db: PgPool,
}

impl PgSignupStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SignupStore for PgSignupStore {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS beta_signups (
                id SERIAL PRIMARY KEY,
                email VARCHAR(255) UNIQUE NOT NULL,
                phone VARCHAR(50),
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn upsert(&self, email: &str, phone: Option<&str>) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO beta_signups (email, phone)
            VALUES ($1, $2)
            ON CONFLICT (email) DO UPDATE SET
                phone = COALESCE(EXCLUDED.phone, beta_signups.phone),
                created_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(email)
        .bind(phone)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<SignupRecord>> {
        let record = sqlx::query_as::<_, SignupRecord>(
            r#"
            SELECT id, email, phone, created_at
            FROM beta_signups
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(record)
    }
}
