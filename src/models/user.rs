use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i64,
    pub first_name: String,
    pub surname: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// A user joined with their worker profile row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkerProfile {
    pub user_id: i64,
    pub first_name: String,
    pub surname: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub experiences: Option<String>,
    pub description: Option<String>,
}
