use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::job_offer_dto::{
        AvailableJobOffersResponse, CreateJobOfferPayload, EmployerInfoResponse,
        JobOfferCreatedResponse, JobOfferListQuery, JobOfferListResponse, JobOfferView,
    },
    error::{Error, Result},
    models::job_offer::JobOfferStatus,
    AppState,
};

fn parse_status_filter(raw: Option<&str>) -> Result<Option<JobOfferStatus>> {
    match raw {
        None => Ok(None),
        Some(value) => JobOfferStatus::parse(value)
            .map(Some)
            .ok_or_else(|| Error::BadRequest(format!("Unknown job offer status: {}", value))),
    }
}

#[utoipa::path(
    post,
    path = "/employers/{employer_id}/joboffers",
    params(
        ("employer_id" = i64, Path, description = "Employer user ID")
    ),
    request_body = CreateJobOfferPayload,
    responses(
        (status = 201, description = "Job offer created", body = Json<JobOfferCreatedResponse>),
        (status = 404, description = "Employer or location not found")
    )
)]
#[axum::debug_handler]
pub async fn create_job_offer(
    State(state): State<AppState>,
    Path(employer_id): Path<i64>,
    Json(payload): Json<CreateJobOfferPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job_offer_id = state
        .job_offer_service
        .create(employer_id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(JobOfferCreatedResponse { job_offer_id }),
    ))
}

#[utoipa::path(
    get,
    path = "/employers/{employer_id}/joboffers",
    params(
        ("employer_id" = i64, Path, description = "Employer user ID"),
        ("status" = Option<String>, Query, description = "Filter by status")
    ),
    responses(
        (status = 200, description = "Job offers created by the employer", body = Json<JobOfferListResponse>),
        (status = 404, description = "Employer not found")
    )
)]
#[axum::debug_handler]
pub async fn list_employer_job_offers(
    State(state): State<AppState>,
    Path(employer_id): Path<i64>,
    Query(query): Query<JobOfferListQuery>,
) -> Result<impl IntoResponse> {
    let status = parse_status_filter(query.status.as_deref())?;
    let offers = state
        .job_offer_service
        .list_for_employer(employer_id, status)
        .await?;
    let job_offers: Vec<JobOfferView> = offers.into_iter().map(Into::into).collect();
    Ok(Json(JobOfferListResponse { job_offers }))
}

#[utoipa::path(
    get,
    path = "/joboffers/available",
    responses(
        (status = 200, description = "Open job offers ordered by date", body = Json<AvailableJobOffersResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_available_job_offers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let offers = state.job_offer_service.list_available().await?;
    let jobs: Vec<JobOfferView> = offers.into_iter().map(Into::into).collect();
    Ok(Json(AvailableJobOffersResponse { jobs }))
}

#[utoipa::path(
    get,
    path = "/joboffers/{job_id}/employer",
    params(
        ("job_id" = i64, Path, description = "Job offer ID")
    ),
    responses(
        (status = 200, description = "Employer and company info", body = Json<EmployerInfoResponse>),
        (status = 404, description = "Job offer not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job_offer_employer(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let info = state.job_offer_service.employer_info(job_id).await?;
    Ok(Json(EmployerInfoResponse::from(info)))
}
