pub mod application;
pub mod company;
pub mod health;
pub mod job_offer;
pub mod user;
pub mod worker;
