pub mod application;
pub mod company;
pub mod job_offer;
pub mod user;
