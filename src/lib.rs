pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;

use crate::services::{
    application_service::ApplicationService, company_service::CompanyService,
    job_offer_service::JobOfferService, user_service::UserService, worker_service::WorkerService,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub company_service: CompanyService,
    pub job_offer_service: JobOfferService,
    pub application_service: ApplicationService,
    pub worker_service: WorkerService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let user_service = UserService::new(pool.clone());
        let company_service = CompanyService::new(pool.clone());
        let job_offer_service = JobOfferService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let worker_service = WorkerService::new(pool.clone());

        Self {
            pool,
            user_service,
            company_service,
            job_offer_service,
            application_service,
            worker_service,
        }
    }
}

/// The full route table, shared between `main` and the integration tests.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/users", post(routes::user::register_user))
        .route(
            "/employers/:employer_id/companies",
            post(routes::company::create_company),
        )
        .route(
            "/employers/company/:company_id",
            put(routes::company::join_company),
        )
        .route(
            "/employers/:employer_id/company",
            put(routes::company::quit_company),
        )
        .route(
            "/companies/:company_id/locations",
            post(routes::company::add_location).delete(routes::company::delete_location),
        )
        .route(
            "/employers/:employer_id/joboffers",
            post(routes::job_offer::create_job_offer)
                .get(routes::job_offer::list_employer_job_offers),
        )
        .route(
            "/joboffers/available",
            get(routes::job_offer::list_available_job_offers),
        )
        .route(
            "/joboffers/:job_id/apply",
            post(routes::application::apply_to_job),
        )
        .route(
            "/joboffers/:job_id/employer",
            get(routes::job_offer::get_job_offer_employer),
        )
        .route(
            "/applications/status",
            put(routes::application::update_application_status),
        )
        .route("/workers", get(routes::worker::list_workers))
        .route(
            "/workers/:worker_id/applications",
            get(routes::worker::list_worker_applications),
        )
}
