pub mod application_service;
pub mod company_service;
pub mod job_offer_service;
pub mod user_service;
pub mod worker_service;
