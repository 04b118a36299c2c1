use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::company_dto::{
        AddLocationPayload, CompanyCreatedResponse, CreateCompanyPayload, DeleteLocationPayload,
        JoinCompanyPayload, LocationCreatedResponse, QuitCompanyPayload,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/employers/{employer_id}/companies",
    params(
        ("employer_id" = i64, Path, description = "Employer user ID")
    ),
    request_body = CreateCompanyPayload,
    responses(
        (status = 201, description = "Company created", body = Json<CompanyCreatedResponse>),
        (status = 404, description = "Employer not found")
    )
)]
#[axum::debug_handler]
pub async fn create_company(
    State(state): State<AppState>,
    Path(employer_id): Path<i64>,
    Json(payload): Json<CreateCompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company_id = state
        .company_service
        .create_company(employer_id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CompanyCreatedResponse { company_id }),
    ))
}

#[utoipa::path(
    put,
    path = "/employers/company/{company_id}",
    params(
        ("company_id" = i64, Path, description = "Company ID")
    ),
    request_body = JoinCompanyPayload,
    responses(
        (status = 200, description = "Employer joined the company"),
        (status = 404, description = "Employer or company not found"),
        (status = 409, description = "Employer is already a member")
    )
)]
#[axum::debug_handler]
pub async fn join_company(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
    Json(payload): Json<JoinCompanyPayload>,
) -> Result<impl IntoResponse> {
    state
        .company_service
        .join_company(company_id, payload.employer_id)
        .await?;
    Ok(Json(json!({ "status": "ok" })))
}

#[utoipa::path(
    put,
    path = "/employers/{employer_id}/company",
    params(
        ("employer_id" = i64, Path, description = "Employer user ID")
    ),
    request_body = QuitCompanyPayload,
    responses(
        (status = 200, description = "Employer left the company"),
        (status = 400, description = "Employer is not part of this company")
    )
)]
#[axum::debug_handler]
pub async fn quit_company(
    State(state): State<AppState>,
    Path(employer_id): Path<i64>,
    Json(payload): Json<QuitCompanyPayload>,
) -> Result<impl IntoResponse> {
    state
        .company_service
        .quit_company(employer_id, payload.company_id)
        .await?;
    Ok(Json(json!({ "status": "ok" })))
}

#[utoipa::path(
    post,
    path = "/companies/{company_id}/locations",
    params(
        ("company_id" = i64, Path, description = "Company ID")
    ),
    request_body = AddLocationPayload,
    responses(
        (status = 201, description = "Location created", body = Json<LocationCreatedResponse>),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn add_location(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
    Json(payload): Json<AddLocationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let location_id = state
        .company_service
        .add_location(company_id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(LocationCreatedResponse { location_id }),
    ))
}

#[utoipa::path(
    delete,
    path = "/companies/{company_id}/locations",
    params(
        ("company_id" = i64, Path, description = "Company ID")
    ),
    request_body = DeleteLocationPayload,
    responses(
        (status = 200, description = "Location deleted"),
        (status = 400, description = "Last location or job offers still attached"),
        (status = 404, description = "Location not found for this company")
    )
)]
#[axum::debug_handler]
pub async fn delete_location(
    State(state): State<AppState>,
    Path(company_id): Path<i64>,
    Json(payload): Json<DeleteLocationPayload>,
) -> Result<impl IntoResponse> {
    state
        .company_service
        .delete_location(company_id, payload.location_id)
        .await?;
    Ok(Json(json!({ "status": "ok" })))
}
