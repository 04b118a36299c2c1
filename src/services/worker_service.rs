use crate::error::{Error, Result};
use crate::models::application::{ApplicationListing, ApplicationStatus};
use crate::models::user::WorkerProfile;
use sqlx::PgPool;

#[derive(Clone)]
pub struct WorkerService {
    pool: PgPool,
}

impl WorkerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<WorkerProfile>> {
        let workers = sqlx::query_as::<_, WorkerProfile>(
            "SELECT u.user_id, u.first_name, u.surname, u.name, u.email, u.phone_number,
                    w.experiences, w.description
             FROM users u
             JOIN workers w ON w.user_id = u.user_id
             ORDER BY u.user_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(workers)
    }

    pub async fn list_applications(
        &self,
        worker_id: i64,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<ApplicationListing>> {
        let is_worker = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM workers WHERE user_id = $1)",
        )
        .bind(worker_id)
        .fetch_one(&self.pool)
        .await?;
        if !is_worker {
            return Err(Error::NotFound("Worker not found".to_string()));
        }

        let applications = sqlx::query_as::<_, ApplicationListing>(
            "SELECT a.worker_id, a.job_offer_id, a.status, a.date, a.wage_offer,
                    o.status AS job_status, o.date AS job_date,
                    o.start_time, o.end_time, o.max_wage,
                    l.number, l.street, l.city,
                    c.name AS company_name
             FROM applications a
             JOIN job_offers o ON o.job_offer_id = a.job_offer_id
             JOIN locations l ON l.location_id = o.location_id
             JOIN companies c ON c.company_id = l.company_id
             WHERE a.worker_id = $1
               AND ($2::text IS NULL OR a.status = $2)
             ORDER BY a.date DESC, a.job_offer_id",
        )
        .bind(worker_id)
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }
}
