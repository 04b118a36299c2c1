use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::worker_dto::{
        ApplicationListQuery, ApplicationListResponse, ApplicationView, WorkerView,
        WorkersResponse,
    },
    error::{Error, Result},
    models::application::ApplicationStatus,
    AppState,
};

#[axum::debug_handler]
pub async fn list_workers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let profiles = state.worker_service.list_all().await?;
    let workers: Vec<WorkerView> = profiles.into_iter().map(Into::into).collect();
    Ok(Json(WorkersResponse { workers }))
}

#[axum::debug_handler]
pub async fn list_worker_applications(
    State(state): State<AppState>,
    Path(worker_id): Path<i64>,
    Query(query): Query<ApplicationListQuery>,
) -> Result<impl IntoResponse> {
    let status = match query.status.as_deref() {
        None => None,
        Some(value) => Some(ApplicationStatus::parse(value).ok_or_else(|| {
            Error::BadRequest(format!("Unknown application status: {}", value))
        })?),
    };
    let listings = state
        .worker_service
        .list_applications(worker_id, status)
        .await?;
    let applications: Vec<ApplicationView> = listings.into_iter().map(Into::into).collect();
    Ok(Json(ApplicationListResponse { applications }))
}
