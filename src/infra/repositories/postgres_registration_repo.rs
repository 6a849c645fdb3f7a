use crate::domain::{models::registration::SessionRegistration, ports::RegistrationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRegistrationRepo {
    pool: PgPool,
}

impl PostgresRegistrationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepo {
    async fn register(
        &self,
        registration: &SessionRegistration,
        cap: Option<i64>,
    ) -> Result<SessionRegistration, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        if let Some(cap) = cap {
            // Row lock on the session serializes concurrent registrations;
            // the count below is read under that lock.
            let locked: Option<String> =
                sqlx::query_scalar("SELECT id FROM program_sessions WHERE id = $1 FOR UPDATE")
                    .bind(&registration.session_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(AppError::Database)?;

            if locked.is_none() {
                return Err(AppError::NotFound("Session not found".into()));
            }

            let count: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM session_registrations WHERE session_id = $1",
            )
            .bind(&registration.session_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

            if count >= cap {
                return Err(AppError::Conflict("Session is at capacity".into()));
            }
        }

        let created = sqlx::query_as::<_, SessionRegistration>(
            r#"INSERT INTO session_registrations (attendee_id, session_id, note, created_at)
               VALUES ($1, $2, $3, $4)
               RETURNING *"#,
        )
        .bind(&registration.attendee_id)
        .bind(&registration.session_id)
        .bind(&registration.note)
        .bind(registration.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn list_by_session(
        &self,
        session_id: &str,
    ) -> Result<Vec<SessionRegistration>, AppError> {
        sqlx::query_as::<_, SessionRegistration>(
            "SELECT * FROM session_registrations WHERE session_id = $1 ORDER BY created_at ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn count_by_session(&self, session_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM session_registrations WHERE session_id = $1")
            .bind(session_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, attendee_id: &str, session_id: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            "DELETE FROM session_registrations WHERE attendee_id = $1 AND session_id = $2",
        )
        .bind(attendee_id)
        .bind(session_id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Registration not found".into()));
        }
        Ok(())
    }
}
