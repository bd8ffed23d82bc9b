use crate::domain::models::{
    management::Management, slot::ReceptionSlot, template::RecurringScheduleTemplate,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[async_trait]
pub trait ManagementRepository: Send + Sync {
    async fn create(&self, management: &Management) -> Result<Management, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Management>, AppError>;
    async fn list(&self) -> Result<Vec<Management>, AppError>;
    async fn update(&self, management: &Management) -> Result<Management, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Bulk insert with duplicate-skip on `(management_id, date, start_time)`.
    /// Returns the number of rows actually created.
    async fn insert_batch(&self, slots: &[ReceptionSlot]) -> Result<u64, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ReceptionSlot>, AppError>;
    async fn list_by_management(
        &self,
        management_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<ReceptionSlot>, AppError>;
    async fn list_booked(
        &self,
        management_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<ReceptionSlot>, AppError>;
    async fn list_all_booked(&self) -> Result<Vec<ReceptionSlot>, AppError>;
    /// Atomic conditional claim: succeeds only when the slot is still offered
    /// (`is_available AND NOT is_booked`). `Ok(None)` means zero rows matched.
    async fn book(
        &self,
        id: &str,
        email: &str,
        notes: Option<&str>,
    ) -> Result<Option<ReceptionSlot>, AppError>;
    async fn cancel(&self, id: &str) -> Result<Option<ReceptionSlot>, AppError>;
    async fn delete_filtered(
        &self,
        management_id: &str,
        date: Option<NaiveDate>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<u64, AppError>;
    async fn delete_by_template(&self, template_id: &str) -> Result<u64, AppError>;
    async fn delete_future_by_template(
        &self,
        template_id: &str,
        from: NaiveDate,
    ) -> Result<u64, AppError>;
}

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn create(
        &self,
        template: &RecurringScheduleTemplate,
    ) -> Result<RecurringScheduleTemplate, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<RecurringScheduleTemplate>, AppError>;
    async fn list_by_management(
        &self,
        management_id: &str,
    ) -> Result<Vec<RecurringScheduleTemplate>, AppError>;
    async fn update(
        &self,
        template: &RecurringScheduleTemplate,
    ) -> Result<RecurringScheduleTemplate, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), AppError>;
}
