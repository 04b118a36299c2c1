use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Job offer statuses. Only `Open -> Completed` is driven by the
/// application state machine; Confirmed/Running are set by seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOfferStatus {
    Open,
    Confirmed,
    Running,
    Completed,
}

impl JobOfferStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            JobOfferStatus::Open => "Open",
            JobOfferStatus::Confirmed => "Confirmed",
            JobOfferStatus::Running => "Running",
            JobOfferStatus::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "open" => Some(JobOfferStatus::Open),
            "confirmed" => Some(JobOfferStatus::Confirmed),
            "running" => Some(JobOfferStatus::Running),
            "completed" => Some(JobOfferStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobOffer {
    pub job_offer_id: i64,
    pub location_id: i64,
    pub created_by: i64,
    pub status: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_wage: Decimal,
    pub working_days: i32,
    pub hours: i32,
}

/// A job offer joined with its location and company display fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobOfferListing {
    pub job_offer_id: i64,
    pub status: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_wage: Decimal,
    pub working_days: i32,
    pub hours: i32,
    pub location_id: i64,
    pub number: String,
    pub street: String,
    pub city: String,
    pub company_id: i64,
    pub company_name: String,
}

/// Denormalized creator identity for a job offer, for display.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobOfferEmployerInfo {
    pub job_offer_id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub company_id: i64,
    pub company_name: String,
    pub location_id: i64,
    pub number: String,
    pub street: String,
    pub city: String,
}
