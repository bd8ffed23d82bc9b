use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::template::RecurringScheduleTemplate;

#[derive(Serialize)]
pub struct SlotsCreatedResponse {
    pub created: u64,
    pub requested: usize,
}

#[derive(Serialize)]
pub struct RecurringScheduleResponse {
    pub template: RecurringScheduleTemplate,
    pub dates: Vec<NaiveDate>,
    pub slots_created: u64,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}
