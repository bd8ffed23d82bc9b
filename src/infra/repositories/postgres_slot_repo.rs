use crate::domain::{models::slot::ReceptionSlot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

pub struct PostgresSlotRepo {
    pool: PgPool,
}

impl PostgresSlotRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PostgresSlotRepo {
    async fn insert_batch(&self, slots: &[ReceptionSlot]) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let mut created = 0u64;
        for slot in slots {
            let result = sqlx::query(
                "INSERT INTO reception_slots (id, management_id, date, start_time, end_time, is_available, is_booked, booked_by, notes, is_recurring, recurring_template_id, created_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                 ON CONFLICT (management_id, date, start_time) DO NOTHING"
            )
                .bind(&slot.id).bind(&slot.management_id).bind(slot.date)
                .bind(slot.start_time).bind(slot.end_time)
                .bind(slot.is_available).bind(slot.is_booked)
                .bind(&slot.booked_by).bind(&slot.notes)
                .bind(slot.is_recurring).bind(&slot.recurring_template_id)
                .bind(slot.created_at)
                .execute(&mut *tx).await.map_err(AppError::Database)?;
            created += result.rows_affected();
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ReceptionSlot>, AppError> {
        sqlx::query_as::<_, ReceptionSlot>("SELECT * FROM reception_slots WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_management(
        &self,
        management_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<ReceptionSlot>, AppError> {
        let mut sql = String::from("SELECT * FROM reception_slots WHERE management_id = $1");
        let mut arg = 1;
        if from.is_some() { arg += 1; sql.push_str(&format!(" AND date >= ${arg}")); }
        if to.is_some() { arg += 1; sql.push_str(&format!(" AND date <= ${arg}")); }
        sql.push_str(" ORDER BY start_time ASC");

        let mut query = sqlx::query_as::<_, ReceptionSlot>(&sql).bind(management_id);
        if let Some(from) = from { query = query.bind(from); }
        if let Some(to) = to { query = query.bind(to); }
        query.fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_booked(
        &self,
        management_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<ReceptionSlot>, AppError> {
        let mut sql = String::from(
            "SELECT * FROM reception_slots WHERE management_id = $1 AND is_booked = TRUE"
        );
        let mut arg = 1;
        if from.is_some() { arg += 1; sql.push_str(&format!(" AND date >= ${arg}")); }
        if to.is_some() { arg += 1; sql.push_str(&format!(" AND date <= ${arg}")); }
        sql.push_str(" ORDER BY start_time ASC");

        let mut query = sqlx::query_as::<_, ReceptionSlot>(&sql).bind(management_id);
        if let Some(from) = from { query = query.bind(from); }
        if let Some(to) = to { query = query.bind(to); }
        query.fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_all_booked(&self) -> Result<Vec<ReceptionSlot>, AppError> {
        sqlx::query_as::<_, ReceptionSlot>(
            "SELECT * FROM reception_slots WHERE is_booked = TRUE ORDER BY start_time ASC"
        )
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn book(
        &self,
        id: &str,
        email: &str,
        notes: Option<&str>,
    ) -> Result<Option<ReceptionSlot>, AppError> {
        // Single conditional update: the predicate is the race protection.
        sqlx::query_as::<_, ReceptionSlot>(
            "UPDATE reception_slots SET is_booked = TRUE, booked_by = $1, notes = $2
             WHERE id = $3 AND is_booked = FALSE AND is_available = TRUE
             RETURNING *"
        )
            .bind(email).bind(notes).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn cancel(&self, id: &str) -> Result<Option<ReceptionSlot>, AppError> {
        sqlx::query_as::<_, ReceptionSlot>(
            "UPDATE reception_slots SET is_booked = FALSE, booked_by = NULL, notes = NULL
             WHERE id = $1
             RETURNING *"
        )
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete_filtered(
        &self,
        management_id: &str,
        date: Option<NaiveDate>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<u64, AppError> {
        let mut sql = String::from("DELETE FROM reception_slots WHERE management_id = $1");
        let mut arg = 1;
        if date.is_some() { arg += 1; sql.push_str(&format!(" AND date = ${arg}")); }
        if start.is_some() { arg += 1; sql.push_str(&format!(" AND start_time >= ${arg}")); }
        if end.is_some() { arg += 1; sql.push_str(&format!(" AND end_time <= ${arg}")); }

        let mut query = sqlx::query(&sql).bind(management_id);
        if let Some(date) = date { query = query.bind(date); }
        if let Some(start) = start { query = query.bind(start); }
        if let Some(end) = end { query = query.bind(end); }

        let result = query.execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }

    async fn delete_by_template(&self, template_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM reception_slots WHERE recurring_template_id = $1")
            .bind(template_id).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }

    async fn delete_future_by_template(
        &self,
        template_id: &str,
        from: NaiveDate,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            "DELETE FROM reception_slots WHERE recurring_template_id = $1 AND date >= $2"
        )
            .bind(template_id).bind(from)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
