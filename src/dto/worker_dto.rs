use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::application::ApplicationListing;
use crate::models::user::WorkerProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerView {
    pub user_id: i64,
    pub first_name: String,
    pub surname: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub experiences: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkersResponse {
    pub workers: Vec<WorkerView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApplicationListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationView {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationView>,
}

impl From<WorkerProfile> for WorkerView {
    fn from(value: WorkerProfile) -> Self {
        Self {
            user_id: value.user_id,
            first_name: value.first_name,
            surname: value.surname,
            name: value.name,
            email: value.email,
            phone_number: value.phone_number,
            experiences: value.experiences,
            description: value.description,
        }
    }
}

impl From<ApplicationListing> for ApplicationView {
    fn from(value: ApplicationListing) -> Self {
        Self {
            worker_id: value.worker_id,
            job_offer_id: value.job_offer_id,
            status: value.status,
            date: value.date,
            wage_offer: value.wage_offer,
            job_status: value.job_status,
            job_date: value.job_date,
            start_time: value.start_time,
            end_time: value.end_time,
            max_wage: value.max_wage,
            number: value.number,
            street: value.street,
            city: value.city,
            company_name: value.company_name,
        }
    }
}
