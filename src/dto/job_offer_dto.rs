use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job_offer::{JobOfferEmployerInfo, JobOfferListing};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobOfferPayload {
    pub location_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_wage: Decimal,
    #[validate(range(min = 1, max = 7))]
    pub working_days: i32,
    #[validate(range(min = 1, max = 24))]
    pub hours: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOfferCreatedResponse {
    pub job_offer_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobOfferListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOfferView {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOfferListResponse {
    pub job_offers: Vec<JobOfferView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableJobOffersResponse {
    pub jobs: Vec<JobOfferView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerIdentity {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerCompany {
    pub company_id: i64,
    pub name: String,
    pub location_id: i64,
    pub number: String,
    pub street: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerInfoResponse {
    pub employer: EmployerIdentity,
    pub company: EmployerCompany,
}

impl From<JobOfferListing> for JobOfferView {
    fn from(value: JobOfferListing) -> Self {
        Self {
            job_offer_id: value.job_offer_id,
            status: value.status,
            date: value.date,
            start_time: value.start_time,
            end_time: value.end_time,
            max_wage: value.max_wage,
            working_days: value.working_days,
            hours: value.hours,
            location_id: value.location_id,
            number: value.number,
            street: value.street,
            city: value.city,
            company_id: value.company_id,
            company_name: value.company_name,
        }
    }
}

impl From<JobOfferEmployerInfo> for EmployerInfoResponse {
    fn from(value: JobOfferEmployerInfo) -> Self {
        Self {
            employer: EmployerIdentity {
                user_id: value.user_id,
                name: value.name,
                email: value.email,
                phone_number: value.phone_number,
            },
            company: EmployerCompany {
                company_id: value.company_id,
                name: value.company_name,
                location_id: value.location_id,
                number: value.number,
                street: value.street,
                city: value.city,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn dates_and_times_use_the_wire_formats() {
        let view = JobOfferView {
            job_offer_id: 1,
            status: "Open".into(),
            date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            max_wage: Decimal::from_str("45.00").unwrap(),
            working_days: 5,
            hours: 8,
            location_id: 1,
            number: "123".into(),
            street: "Main St.".into(),
            city: "San Francisco".into(),
            company_id: 1,
            company_name: "Tech Innovators LLC".into(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["date"], "2023-12-01");
        assert_eq!(json["start_time"], "09:00:00");
        assert_eq!(json["end_time"], "17:00:00");
    }

    #[test]
    fn payload_times_parse_from_wire_format() {
        let payload: CreateJobOfferPayload = serde_json::from_value(serde_json::json!({
            "location_id": 3,
            "date": "2024-06-15",
            "start_time": "08:30:00",
            "end_time": "16:30:00",
            "max_wage": 40.5,
            "working_days": 5,
            "hours": 8
        }))
        .unwrap();
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(
            payload.start_time,
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
    }
}
