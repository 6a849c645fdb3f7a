use crate::domain::{models::registration::SessionRegistration, ports::RegistrationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRegistrationRepo {
    pool: SqlitePool,
}

impl SqliteRegistrationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for SqliteRegistrationRepo {
    async fn register(
        &self,
        registration: &SessionRegistration,
        cap: Option<i64>,
    ) -> Result<SessionRegistration, AppError> {
        let result = match cap {
            // Conditional insert: the count check and the insert are one
            // statement, so two concurrent registrations cannot both pass
            // the check before either lands.
            Some(cap) => sqlx::query(
                r#"INSERT INTO session_registrations (attendee_id, session_id, note, created_at)
                   SELECT ?, ?, ?, ?
                   WHERE (SELECT COUNT(*) FROM session_registrations WHERE session_id = ?) < ?"#,
            )
            .bind(&registration.attendee_id)
            .bind(&registration.session_id)
            .bind(&registration.note)
            .bind(registration.created_at)
            .bind(&registration.session_id)
            .bind(cap)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?,
            None => sqlx::query(
                r#"INSERT INTO session_registrations (attendee_id, session_id, note, created_at)
                   VALUES (?, ?, ?, ?)"#,
            )
            .bind(&registration.attendee_id)
            .bind(&registration.session_id)
            .bind(&registration.note)
            .bind(registration.created_at)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?,
        };

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict("Session is at capacity".into()));
        }
        Ok(registration.clone())
    }

    async fn list_by_session(
        &self,
        session_id: &str,
    ) -> Result<Vec<SessionRegistration>, AppError> {
        sqlx::query_as::<_, SessionRegistration>(
            "SELECT * FROM session_registrations WHERE session_id = ? ORDER BY created_at ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn count_by_session(&self, session_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM session_registrations WHERE session_id = ?")
            .bind(session_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, attendee_id: &str, session_id: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            "DELETE FROM session_registrations WHERE attendee_id = ? AND session_id = ?",
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
