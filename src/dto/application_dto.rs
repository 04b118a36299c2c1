use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyPayload {
    pub worker_id: i64,
    pub wage_offer: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationCreatedResponse {
    pub application_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateApplicationStatusPayload {
    pub job_offer_id: i64,
    pub worker_id: i64,
    pub new_status: String,
}
