use reception_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::EmailService,
    domain::services::schedule_parser::ScheduleParser,
    error::AppError,
    infra::repositories::{
        sqlite_management_repo::SqliteManagementRepo,
        sqlite_slot_repo::SqliteSlotRepo,
        sqlite_template_repo::SqliteTemplateRepo,
    },
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::Request,
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tera::Tera;
use tower::ServiceExt;
use uuid::Uuid;

pub struct MockEmailService;

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(
        &self,
        _recipient: &str,
        _subject: &str,
        _html_body: &str,
    ) -> Result<(), AppError> {
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let mut tera = Tera::default();
        tera.add_raw_template("booking_confirmation.html", "<html>Mock confirmation for {{ booker_name }}</html>").unwrap();
        tera.add_raw_template("admin_notification.html", "<html>Mock notice about {{ booked_by }}</html>").unwrap();
        let templates = Arc::new(tera);

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            mail_service_url: "http://localhost".to_string(),
            mail_service_token: "token".to_string(),
            admin_email: "reception@test.local".to_string(),
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            management_repo: Arc::new(SqliteManagementRepo::new(pool.clone())),
            slot_repo: Arc::new(SqliteSlotRepo::new(pool.clone())),
            template_repo: Arc::new(SqliteTemplateRepo::new(pool.clone())),
            email_service: Arc::new(MockEmailService),
            schedule_parser: Arc::new(ScheduleParser::new()),
            templates,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    #[allow(dead_code)]
    pub async fn create_management(&self, full_name: &str, office_hours: Option<&str>) -> String {
        let payload = json!({
            "full_name": full_name,
            "position": "Head of Department",
            "email": "manager@test.local",
            "office_hours": office_hours,
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/managements")
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        assert!(response.status().is_success(), "Failed to create management in test helper");
        let body = parse_body(response).await;
        body["id"].as_str().unwrap().to_string()
    }

    #[allow(dead_code)]
    pub async fn create_slots(
        &self,
        management_id: &str,
        date: &str,
        start_time: &str,
        end_time: &str,
        slot_duration: i64,
    ) -> Value {
        let payload = json!({
            "date": date,
            "start_time": start_time,
            "end_time": end_time,
            "slot_duration": slot_duration,
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/managements/{}/slots", management_id))
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        assert!(response.status().is_success(), "Failed to create slots in test helper");
        parse_body(response).await
    }

    #[allow(dead_code)]
    pub async fn list_slots(&self, management_id: &str) -> Value {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/v1/managements/{}/slots", management_id))
                .body(Body::empty())
                .unwrap()
        ).await.unwrap();

        assert!(response.status().is_success(), "Failed to list slots in test helper");
        parse_body(response).await
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
