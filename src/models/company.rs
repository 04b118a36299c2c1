use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub company_id: i64,
    pub created_by: i64,
    pub name: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub location_id: i64,
    pub company_id: i64,
    pub number: String,
    pub street: String,
    pub city: String,
}

/// One membership row per (employer, company) pair. `company_id` is NULL
/// while the employer is unaffiliated; quitting nulls it rather than
/// deleting the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployerMembership {
    pub employer_id: i64,
    pub user_id: i64,
    pub company_id: Option<i64>,
}
