use crate::domain::{models::management::Management, ports::ManagementRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteManagementRepo {
    pool: SqlitePool,
}

impl SqliteManagementRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManagementRepository for SqliteManagementRepo {
    async fn create(&self, management: &Management) -> Result<Management, AppError> {
        sqlx::query_as::<_, Management>(
            "INSERT INTO managements (id, full_name, position, email, phone, office_hours, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&management.id).bind(&management.full_name).bind(&management.position)
            .bind(&management.email).bind(&management.phone).bind(&management.office_hours)
            .bind(management.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Management>, AppError> {
        sqlx::query_as::<_, Management>("SELECT * FROM managements WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Management>, AppError> {
        sqlx::query_as::<_, Management>("SELECT * FROM managements ORDER BY full_name ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, management: &Management) -> Result<Management, AppError> {
        sqlx::query_as::<_, Management>(
            "UPDATE managements SET full_name=?, position=?, email=?, phone=?, office_hours=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&management.full_name).bind(&management.position).bind(&management.email)
            .bind(&management.phone).bind(&management.office_hours)
            .bind(&management.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM managements WHERE id = ?")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Management not found".into()));
        }
        Ok(())
    }
}
