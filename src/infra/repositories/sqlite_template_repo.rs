use crate::domain::{models::template::RecurringScheduleTemplate, ports::TemplateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTemplateRepo {
    pool: SqlitePool,
}

impl SqliteTemplateRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateRepository for SqliteTemplateRepo {
    async fn create(
        &self,
        template: &RecurringScheduleTemplate,
    ) -> Result<RecurringScheduleTemplate, AppError> {
        sqlx::query_as::<_, RecurringScheduleTemplate>(
            "INSERT INTO recurring_templates (id, management_id, weekday, week_number, start_time, end_time, slot_duration, months_ahead, is_active, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&template.id).bind(&template.management_id)
            .bind(template.weekday).bind(template.week_number)
            .bind(template.start_time).bind(template.end_time)
            .bind(template.slot_duration).bind(template.months_ahead)
            .bind(template.is_active).bind(template.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<RecurringScheduleTemplate>, AppError> {
        sqlx::query_as::<_, RecurringScheduleTemplate>(
            "SELECT * FROM recurring_templates WHERE id = ?"
        )
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_management(
        &self,
        management_id: &str,
    ) -> Result<Vec<RecurringScheduleTemplate>, AppError> {
        sqlx::query_as::<_, RecurringScheduleTemplate>(
            "SELECT * FROM recurring_templates WHERE management_id = ? ORDER BY created_at ASC"
        )
            .bind(management_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(
        &self,
        template: &RecurringScheduleTemplate,
    ) -> Result<RecurringScheduleTemplate, AppError> {
        sqlx::query_as::<_, RecurringScheduleTemplate>(
            "UPDATE recurring_templates SET weekday=?, week_number=?, start_time=?, end_time=?, slot_duration=?, months_ahead=?, is_active=?
             WHERE id=?
             RETURNING *"
        )
            .bind(template.weekday).bind(template.week_number)
            .bind(template.start_time).bind(template.end_time)
            .bind(template.slot_duration).bind(template.months_ahead)
            .bind(template.is_active)
            .bind(&template.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM recurring_templates WHERE id = ?")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Recurring template not found".into()));
        }
        Ok(())
    }
}
