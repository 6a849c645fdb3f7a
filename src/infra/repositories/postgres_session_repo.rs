use crate::domain::{
    models::overview::SessionOverviewRecord, models::session::ProgramSession,
    ports::SessionRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresSessionRepo {
    pool: PgPool,
}

impl PostgresSessionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepo {
    async fn create(&self, session: &ProgramSession) -> Result<ProgramSession, AppError> {
        sqlx::query_as::<_, ProgramSession>(
            r#"INSERT INTO program_sessions (id, program_item_id, location_id, start_time, end_time, note, status, attendee_limit, created_by, created_at, updated_by, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
               RETURNING *"#
        )
            .bind(&session.id)
            .bind(&session.program_item_id)
            .bind(&session.location_id)
            .bind(session.start_time)
            .bind(session.end_time)
            .bind(&session.note)
            .bind(session.status)
            .bind(session.attendee_limit)
            .bind(&session.audit.created_by)
            .bind(session.audit.created_at)
            .bind(&session.audit.updated_by)
            .bind(session.audit.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ProgramSession>, AppError> {
        sqlx::query_as::<_, ProgramSession>("SELECT * FROM program_sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_item(&self, program_item_id: &str) -> Result<Vec<ProgramSession>, AppError> {
        sqlx::query_as::<_, ProgramSession>(
            "SELECT * FROM program_sessions WHERE program_item_id = $1 ORDER BY start_time ASC NULLS LAST"
        )
            .bind(program_item_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, session: &ProgramSession) -> Result<ProgramSession, AppError> {
        sqlx::query_as::<_, ProgramSession>(
            r#"UPDATE program_sessions SET location_id=$1, start_time=$2, end_time=$3, note=$4, status=$5, attendee_limit=$6, updated_by=$7, updated_at=$8 WHERE id=$9 RETURNING *"#
        )
            .bind(&session.location_id)
            .bind(session.start_time)
            .bind(session.end_time)
            .bind(&session.note)
            .bind(session.status)
            .bind(session.attendee_limit)
            .bind(&session.audit.updated_by)
            .bind(session.audit.updated_at)
            .bind(&session.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM program_sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Session not found".into()));
        }
        Ok(())
    }

    async fn count_by_item(&self, program_item_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM program_sessions WHERE program_item_id = $1")
            .bind(program_item_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_overview_records(
        &self,
        event_id: &str,
    ) -> Result<Vec<SessionOverviewRecord>, AppError> {
        sqlx::query_as::<_, SessionOverviewRecord>(
            r#"SELECT
                   i.id AS program_item_id,
                   i.name AS name,
                   i.item_type AS item_type,
                   i.attendee_limit AS item_attendee_limit,
                   i.attendee_limit_buffer AS attendee_limit_buffer,
                   i.required_min AS required_min,
                   i.before_buffer_min AS before_buffer_min,
                   i.after_buffer_min AS after_buffer_min,
                   s.attendee_limit AS session_attendee_limit,
                   s.note AS note,
                   s.status AS status,
                   s.start_time AS start_time,
                   s.end_time AS end_time,
                   (SELECT COUNT(*) FROM session_registrations r WHERE r.session_id = s.id) AS attendee_count
               FROM program_sessions s
               JOIN program_items i ON i.id = s.program_item_id
               WHERE i.event_id = $1
               ORDER BY s.start_time ASC NULLS LAST"#
        )
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
