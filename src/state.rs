use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{EmailService, ManagementRepository, SlotRepository, TemplateRepository};
use crate::domain::services::schedule_parser::ScheduleParser;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub management_repo: Arc<dyn ManagementRepository>,
    pub slot_repo: Arc<dyn SlotRepository>,
    pub template_repo: Arc<dyn TemplateRepository>,
    pub email_service: Arc<dyn EmailService>,
    pub schedule_parser: Arc<ScheduleParser>,
    pub templates: Arc<Tera>,
}
