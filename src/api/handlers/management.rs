use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateManagementRequest, UpdateManagementRequest};
use crate::domain::models::management::Management;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_management(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateManagementRequest>,
) -> Result<impl IntoResponse, AppError> {
    let full_name = payload.full_name.trim().to_string();
    let position = payload.position.trim().to_string();
    let email = payload.email.trim().to_string();

    if full_name.is_empty() || position.is_empty() || email.is_empty() {
        return Err(AppError::Validation("full_name, position and email are required".into()));
    }

    let management = Management::new(
        full_name,
        position,
        email,
        payload.phone,
        payload.office_hours,
    );

    let created = state.management_repo.create(&management).await?;
    info!("Management created: {}", created.id);
    Ok(Json(created))
}

pub async fn list_managements(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let managements = state.management_repo.list().await?;
    Ok(Json(managements))
}

pub async fn get_management(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let management = state.management_repo.find_by_id(&management_id).await?
        .ok_or(AppError::NotFound("Management not found".into()))?;
    Ok(Json(management))
}

pub async fn update_management(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
    Json(payload): Json<UpdateManagementRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut management = state.management_repo.find_by_id(&management_id).await?
        .ok_or(AppError::NotFound("Management not found".into()))?;

    if let Some(full_name) = payload.full_name { management.full_name = full_name; }
    if let Some(position) = payload.position { management.position = position; }
    if let Some(email) = payload.email { management.email = email; }
    if let Some(phone) = payload.phone {
        management.phone = if phone.is_empty() { None } else { Some(phone) };
    }
    if let Some(office_hours) = payload.office_hours {
        management.office_hours = if office_hours.is_empty() { None } else { Some(office_hours) };
    }

    let updated = state.management_repo.update(&management).await?;
    info!("Management updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_management(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.management_repo.delete(&management_id).await?;
    info!("Management deleted: {}", management_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
