use crate::database::is_unique_violation;
use crate::dto::user_dto::RegisterUserPayload;
use crate::error::{Error, Result};
use sqlx::PgPool;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the user row and the role row in one transaction. Role is
    /// fixed at creation: a user is exactly one of employer/worker.
    pub async fn register(&self, payload: RegisterUserPayload) -> Result<i64> {
        let role = payload.role.to_ascii_lowercase();
        if role != "employer" && role != "worker" {
            return Err(Error::BadRequest(
                "Role must be either 'employer' or 'worker'".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let name = format!("{} {}", payload.first_name, payload.surname);
        let inserted = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (first_name, surname, name, email, phone_number)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING user_id",
        )
        .bind(&payload.first_name)
        .bind(&payload.surname)
        .bind(&name)
        .bind(&payload.email)
        .bind(&payload.phone_number)
        .fetch_one(&mut *tx)
        .await;

        let user_id = match inserted {
            Ok(id) => id,
            Err(err) if is_unique_violation(&err) => {
                return Err(Error::Conflict(
                    "A user with this email already exists".to_string(),
                ));
            }
            Err(err) => return Err(err.into()),
        };

        if role == "employer" {
            sqlx::query("INSERT INTO employers (user_id, company_id) VALUES ($1, NULL)")
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        } else {
            sqlx::query("INSERT INTO workers (user_id, experiences, description) VALUES ($1, $2, $3)")
                .bind(user_id)
                .bind(&payload.experiences)
                .bind(&payload.description)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        tracing::info!(user_id, role = %role, "registered user");
        Ok(user_id)
    }
}
