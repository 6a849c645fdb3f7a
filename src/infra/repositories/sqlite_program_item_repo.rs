use crate::domain::{models::program_item::ProgramItem, ports::ProgramItemRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProgramItemRepo {
    pool: SqlitePool,
}

impl SqliteProgramItemRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgramItemRepository for SqliteProgramItemRepo {
    async fn create(&self, item: &ProgramItem) -> Result<ProgramItem, AppError> {
        sqlx::query_as::<_, ProgramItem>(
            r#"INSERT INTO program_items (id, event_id, location_id, name, description, item_type, attendee_limit, attendee_limit_buffer, required_min, before_buffer_min, after_buffer_min, created_by, created_at, updated_by, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&item.id)
            .bind(&item.event_id)
            .bind(&item.location_id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.item_type)
            .bind(item.attendee_limit)
            .bind(item.attendee_limit_buffer)
            .bind(item.required_min)
            .bind(item.before_buffer_min)
            .bind(item.after_buffer_min)
            .bind(&item.audit.created_by)
            .bind(item.audit.created_at)
            .bind(&item.audit.updated_by)
            .bind(item.audit.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ProgramItem>, AppError> {
        sqlx::query_as::<_, ProgramItem>("SELECT * FROM program_items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<ProgramItem>, AppError> {
        sqlx::query_as::<_, ProgramItem>(
            "SELECT * FROM program_items WHERE event_id = ? ORDER BY name ASC"
        )
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, item: &ProgramItem) -> Result<ProgramItem, AppError> {
        sqlx::query_as::<_, ProgramItem>(
            r#"UPDATE program_items SET location_id=?, name=?, description=?, item_type=?, attendee_limit=?, attendee_limit_buffer=?, required_min=?, before_buffer_min=?, after_buffer_min=?, updated_by=?, updated_at=? WHERE id=? RETURNING *"#
        )
            .bind(&item.location_id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.item_type)
            .bind(item.attendee_limit)
            .bind(item.attendee_limit_buffer)
            .bind(item.required_min)
            .bind(item.before_buffer_min)
            .bind(item.after_buffer_min)
            .bind(&item.audit.updated_by)
            .bind(item.audit.updated_at)
            .bind(&item.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM program_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Program item not found".into()));
        }
        Ok(())
    }

    async fn count_by_event(&self, event_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM program_items WHERE event_id = ?")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
