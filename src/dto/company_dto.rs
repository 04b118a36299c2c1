use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCompanyPayload {
    #[validate(length(min = 1))]
    pub name: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCreatedResponse {
    pub company_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinCompanyPayload {
    pub employer_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuitCompanyPayload {
    pub company_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddLocationPayload {
    #[validate(length(min = 1))]
    pub street: String,
    #[validate(length(min = 1))]
    pub number: String,
    #[validate(length(min = 1))]
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCreatedResponse {
    pub location_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteLocationPayload {
    pub location_id: i64,
}
