use crate::domain::{models::slot::ReceptionSlot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

pub struct SqliteSlotRepo {
    pool: SqlitePool,
}

impl SqliteSlotRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for SqliteSlotRepo {
    async fn insert_batch(&self, slots: &[ReceptionSlot]) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let mut created = 0u64;
        for slot in slots {
            let result = sqlx::query(
                "INSERT INTO reception_slots (id, management_id, date, start_time, end_time, is_available, is_booked, booked_by, notes, is_recurring, recurring_template_id, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
        sqlx::query_as::<_, ReceptionSlot>("SELECT * FROM reception_slots WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_management(
        &self,
        management_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<ReceptionSlot>, AppError> {
        let mut sql = String::from("SELECT * FROM reception_slots WHERE management_id = ?");
        if from.is_some() { sql.push_str(" AND date >= ?"); }
        if to.is_some() { sql.push_str(" AND date <= ?"); }
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
            "SELECT * FROM reception_slots WHERE management_id = ? AND is_booked = 1"
        );
        if from.is_some() { sql.push_str(" AND date >= ?"); }
        if to.is_some() { sql.push_str(" AND date <= ?"); }
        sql.push_str(" ORDER BY start_time ASC");

        let mut query = sqlx::query_as::<_, ReceptionSlot>(&sql).bind(management_id);
        if let Some(from) = from { query = query.bind(from); }
        if let Some(to) = to { query = query.bind(to); }
        query.fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_all_booked(&self) -> Result<Vec<ReceptionSlot>, AppError> {
        sqlx::query_as::<_, ReceptionSlot>(
            "SELECT * FROM reception_slots WHERE is_booked = 1 ORDER BY start_time ASC"
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
            "UPDATE reception_slots SET is_booked = 1, booked_by = ?, notes = ?
             WHERE id = ? AND is_booked = 0 AND is_available = 1
             RETURNING *"
        )
            .bind(email).bind(notes).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn cancel(&self, id: &str) -> Result<Option<ReceptionSlot>, AppError> {
        sqlx::query_as::<_, ReceptionSlot>(
            "UPDATE reception_slots SET is_booked = 0, booked_by = NULL, notes = NULL
             WHERE id = ?
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
        let mut sql = String::from("DELETE FROM reception_slots WHERE management_id = ?");
        if date.is_some() { sql.push_str(" AND date = ?"); }
        if start.is_some() { sql.push_str(" AND start_time >= ?"); }
        if end.is_some() { sql.push_str(" AND end_time <= ?"); }

        let mut query = sqlx::query(&sql).bind(management_id);
        if let Some(date) = date { query = query.bind(date); }
        if let Some(start) = start { query = query.bind(start); }
        if let Some(end) = end { query = query.bind(end); }

        let result = query.execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }

    async fn delete_by_template(&self, template_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM reception_slots WHERE recurring_template_id = ?")
            .bind(template_id).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }

    async fn delete_future_by_template(
        &self,
        template_id: &str,
        from: NaiveDate,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            "DELETE FROM reception_slots WHERE recurring_template_id = ? AND date >= ?"
        )
            .bind(template_id).bind(from)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
