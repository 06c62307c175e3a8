//! PostgreSQL registration repository implementation.
//!
//! Registrations live in a single `registrations` table (see
//! `migrations/`). The events column is a `TEXT[]` of event names.
//!
//! # Example
//!
//! ```no_run
//! use fest_registration::stores::PostgresRegistrationRepository;
//! use sqlx::PgPool;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = PgPool::connect("postgres://localhost/fest").await?;
//! let repo = PostgresRegistrationRepository::new(pool);
//! repo.migrate().await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{RegistrationError, Result};
use crate::model::{PaymentStatus, Registration, RegistrationId};
use crate::providers::RegistrationRepository;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// `PostgreSQL` registration repository.
#[derive(Clone)]
pub struct PostgresRegistrationRepository {
    /// `PostgreSQL` connection pool.
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    /// Create a new `PostgreSQL` registration repository.
    ///
    /// # Arguments
    ///
    /// * `pool` - `PostgreSQL` connection pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns error if migrations fail.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RegistrationError::Database(format!("Migration failed: {e}")))?;
        Ok(())
    }

    /// Load a registration by id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails or a stored value is out of range.
    pub async fn find(&self, id: RegistrationId) -> Result<Option<Registration>> {
        type Row = (
            String,
            String,
            String,
            String,
            String,
            String,
            Vec<String>,
            i64,
            String,
            DateTime<Utc>,
            String,
        );

        let row: Option<Row> = sqlx::query_as(
            r"
            SELECT full_name, email, phone, college, department, year_of_study,
                   events, total_amount, transaction_id, registered_at, payment_status
            FROM registrations
            WHERE id = $1
            ",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RegistrationError::Database(format!("Failed to load registration: {e}")))?;

        row.map(
            |(
                full_name,
                email,
                phone,
                college,
                department,
                year_of_study,
                events,
                total_amount,
                transaction_id,
                registered_at,
                payment_status,
            )| {
                Ok(Registration {
                    full_name,
                    email,
                    phone,
                    college,
                    department,
                    year_of_study,
                    events,
                    total_amount: u32::try_from(total_amount).map_err(|e| {
                        RegistrationError::Database(format!("total_amount out of range: {e}"))
                    })?,
                    transaction_id,
                    registered_at,
                    payment_status: payment_status
                        .parse::<PaymentStatus>()
                        .map_err(RegistrationError::Database)?,
                })
            },
        )
        .transpose()
    }
}

impl RegistrationRepository for PostgresRegistrationRepository {
    async fn insert(&self, registration: &Registration) -> Result<RegistrationId> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO registrations (
                full_name, email, phone, college, department, year_of_study,
                events, total_amount, transaction_id, registered_at, payment_status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            ",
        )
        .bind(&registration.full_name)
        .bind(&registration.email)
        .bind(&registration.phone)
        .bind(&registration.college)
        .bind(&registration.department)
        .bind(&registration.year_of_study)
        .bind(&registration.events)
        .bind(i64::from(registration.total_amount))
        .bind(&registration.transaction_id)
        .bind(registration.registered_at)
        .bind(registration.payment_status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RegistrationError::Database(format!("Failed to insert registration: {e}")))?;

        Ok(RegistrationId(id))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| RegistrationError::Database(format!("Ping failed: {e}")))?;
        Ok(())
    }
}
