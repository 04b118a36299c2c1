pub mod application_dto;
pub mod company_dto;
pub mod job_offer_dto;
pub mod user_dto;
pub mod worker_dto;
