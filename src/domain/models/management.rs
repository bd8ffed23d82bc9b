use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Management {
    pub id: String,
    pub full_name: String,
    pub position: String,
    pub email: String,
    pub phone: Option<String>,
    pub office_hours: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Management {
    pub fn new(
        full_name: String,
        position: String,
        email: String,
        phone: Option<String>,
        office_hours: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            full_name,
            position,
            email,
            phone,
            office_hours,
            created_at: Utc::now(),
        }
    }
}
