use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// `Pending` is the only non-terminal application status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Refused,
}

impl ApplicationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Refused => "Refused",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pending" => Some(ApplicationStatus::Pending),
            "accepted" => Some(ApplicationStatus::Accepted),
            "refused" => Some(ApplicationStatus::Refused),
            _ => None,
        }
    }

    /// Whether this status is a valid decision on a pending application.
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Accepted | ApplicationStatus::Refused
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub worker_id: i64,
    pub job_offer_id: i64,
    pub status: String,
    pub date: NaiveDate,
    pub wage_offer: Decimal,
}

/// An application joined with the offer it bids on plus location and
/// company display fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationListing {
    pub worker_id: i64,
    pub job_offer_id: i64,
    pub status: String,
    pub date: NaiveDate,
    pub wage_offer: Decimal,
    pub job_status: String,
    pub job_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_wage: Decimal,
    pub number: String,
    pub street: String,
    pub city: String,
    pub company_name: String,
}
