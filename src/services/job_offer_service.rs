use crate::dto::job_offer_dto::CreateJobOfferPayload;
use crate::error::{Error, Result};
use crate::models::job_offer::{JobOfferEmployerInfo, JobOfferListing, JobOfferStatus};
use sqlx::PgPool;

const LISTING_COLUMNS: &str = "o.job_offer_id, o.status, o.date, o.start_time, o.end_time, \
     o.max_wage, o.working_days, o.hours, \
     l.location_id, l.number, l.street, l.city, \
     c.company_id, c.name AS company_name";

#[derive(Clone)]
pub struct JobOfferService {
    pool: PgPool,
}

impl JobOfferService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new offer with status Open. The creator must be an
    /// employer and a member of the company owning the location.
    pub async fn create(&self, employer_id: i64, payload: CreateJobOfferPayload) -> Result<i64> {
        let is_employer = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employers WHERE user_id = $1)",
        )
        .bind(employer_id)
        .fetch_one(&self.pool)
        .await?;
        if !is_employer {
            return Err(Error::NotFound("Employer not found".to_string()));
        }

        let location_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM locations WHERE location_id = $1)",
        )
        .bind(payload.location_id)
        .fetch_one(&self.pool)
        .await?;
        if !location_exists {
            return Err(Error::NotFound("Location not found".to_string()));
        }

        let is_member = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                 SELECT 1
                 FROM locations l
                 JOIN employers e ON e.company_id = l.company_id
                 WHERE l.location_id = $1 AND e.user_id = $2
             )",
        )
        .bind(payload.location_id)
        .bind(employer_id)
        .fetch_one(&self.pool)
        .await?;
        if !is_member {
            return Err(Error::NotFound(
                "Location does not belong to one of the employer's companies".to_string(),
            ));
        }

        let job_offer_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO job_offers
                 (location_id, created_by, status, date, start_time, end_time,
                  max_wage, working_days, hours)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING job_offer_id",
        )
        .bind(payload.location_id)
        .bind(employer_id)
        .bind(JobOfferStatus::Open.as_str())
        .bind(payload.date)
        .bind(payload.start_time)
        .bind(payload.end_time)
        .bind(payload.max_wage)
        .bind(payload.working_days)
        .bind(payload.hours)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(job_offer_id, employer_id, "created job offer");
        Ok(job_offer_id)
    }

    pub async fn list_for_employer(
        &self,
        employer_id: i64,
        status: Option<JobOfferStatus>,
    ) -> Result<Vec<JobOfferListing>> {
        let is_employer = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employers WHERE user_id = $1)",
        )
        .bind(employer_id)
        .fetch_one(&self.pool)
        .await?;
        if !is_employer {
            return Err(Error::NotFound("Employer not found".to_string()));
        }

        let query = format!(
            "SELECT {LISTING_COLUMNS}
             FROM job_offers o
             JOIN locations l ON l.location_id = o.location_id
             JOIN companies c ON c.company_id = l.company_id
             WHERE o.created_by = $1
               AND ($2::text IS NULL OR o.status = $2)
             ORDER BY o.date DESC, o.job_offer_id"
        );
        let offers = sqlx::query_as::<_, JobOfferListing>(&query)
            .bind(employer_id)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(&self.pool)
            .await?;
        Ok(offers)
    }

    pub async fn list_available(&self) -> Result<Vec<JobOfferListing>> {
        let query = format!(
            "SELECT {LISTING_COLUMNS}
             FROM job_offers o
             JOIN locations l ON l.location_id = o.location_id
             JOIN companies c ON c.company_id = l.company_id
             WHERE o.status = $1
             ORDER BY o.date ASC, o.job_offer_id"
        );
        let offers = sqlx::query_as::<_, JobOfferListing>(&query)
            .bind(JobOfferStatus::Open.as_str())
            .fetch_all(&self.pool)
            .await?;
        Ok(offers)
    }

    pub async fn employer_info(&self, job_offer_id: i64) -> Result<JobOfferEmployerInfo> {
        let info = sqlx::query_as::<_, JobOfferEmployerInfo>(
            "SELECT o.job_offer_id,
                    u.user_id, u.name, u.email, u.phone_number,
                    c.company_id, c.name AS company_name,
                    l.location_id, l.number, l.street, l.city
             FROM job_offers o
             JOIN users u ON u.user_id = o.created_by
             JOIN locations l ON l.location_id = o.location_id
             JOIN companies c ON c.company_id = l.company_id
             WHERE o.job_offer_id = $1",
        )
        .bind(job_offer_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Job offer not found".to_string()))?;
        Ok(info)
    }
}
