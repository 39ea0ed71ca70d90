//! Subscriber repository for database operations
//!
//! Write-only access to `subscribers`; the unique index on `email` is the
//! source of truth for duplicates.

use sqlx::PgPool;

use crate::core::db::models::SubscriberRecord;

/// SQLSTATE for unique_violation
pub const UNIQUE_VIOLATION: &str = "23505";

/// Subscriber repository error types
#[derive(Debug, thiserror::Error)]
pub enum SubscriberRepositoryError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Subscriber repository for database operations
#[derive(Clone)]
pub struct SubscriberRepository {
    pool: PgPool,
}

impl SubscriberRepository {
    /// Create a new subscriber repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a subscriber and return its id
    pub async fn create(&self, record: &SubscriberRecord) -> Result<i64, SubscriberRepositoryError> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO subscribers
                (name, email, company_name, revenue_making, mrr,
                 investment_raised, investment_amount, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.company_name)
        .bind(&record.revenue_making)
        .bind(&record.mrr)
        .bind(&record.investment_raised)
        .bind(&record.investment_amount)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => Ok(id),
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                Err(SubscriberRepositoryError::EmailAlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }
}
