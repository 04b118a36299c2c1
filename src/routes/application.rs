use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::{
    dto::application_dto::{
        ApplicationCreatedResponse, ApplyPayload, UpdateApplicationStatusPayload,
    },
    error::{Error, Result},
    models::application::ApplicationStatus,
    AppState,
};

#[axum::debug_handler]
pub async fn apply_to_job(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
    Json(payload): Json<ApplyPayload>,
) -> Result<impl IntoResponse> {
    let application_date = state
        .application_service
        .apply(job_id, payload.worker_id, payload.wage_offer)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApplicationCreatedResponse { application_date }),
    ))
}

#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    Json(payload): Json<UpdateApplicationStatusPayload>,
) -> Result<impl IntoResponse> {
    let decision = ApplicationStatus::parse(&payload.new_status).ok_or_else(|| {
        Error::BadRequest(format!(
            "Invalid application status: {}",
            payload.new_status
        ))
    })?;
    state
        .application_service
        .decide(payload.job_offer_id, payload.worker_id, decision)
        .await?;
    Ok(Json(json!({ "status": "ok" })))
}
