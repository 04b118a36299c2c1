use crate::error::{Error, Result};
use crate::models::application::ApplicationStatus;
use crate::models::job_offer::JobOfferStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a Pending application dated today. The offer row is locked
    /// for the whole check-then-insert, so no application can land after
    /// the offer has left Open.
    pub async fn apply(
        &self,
        job_offer_id: i64,
        worker_id: i64,
        wage_offer: Decimal,
    ) -> Result<NaiveDate> {
        let mut tx = self.pool.begin().await?;

        let offer = sqlx::query_as::<_, (String, Decimal)>(
            "SELECT status, max_wage FROM job_offers WHERE job_offer_id = $1 FOR UPDATE",
        )
        .bind(job_offer_id)
        .fetch_optional(&mut *tx)
        .await?;
        let (offer_status, max_wage) =
            offer.ok_or_else(|| Error::NotFound("Job offer not found".to_string()))?;

        let worker_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM workers WHERE user_id = $1)",
        )
        .bind(worker_id)
        .fetch_one(&mut *tx)
        .await?;
        if !worker_exists {
            return Err(Error::NotFound("Worker not found".to_string()));
        }

        if JobOfferStatus::parse(&offer_status) != Some(JobOfferStatus::Open) {
            return Err(Error::BadRequest(
                "Job offer is not open for applications".to_string(),
            ));
        }

        if wage_offer > max_wage {
            return Err(Error::BadRequest(
                "Wage offer exceeds the maximum wage for this job offer".to_string(),
            ));
        }

        let already_applied = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM applications WHERE worker_id = $1 AND job_offer_id = $2)",
        )
        .bind(worker_id)
        .bind(job_offer_id)
        .fetch_one(&mut *tx)
        .await?;
        if already_applied {
            return Err(Error::Conflict(
                "Worker has already applied to this job offer".to_string(),
            ));
        }

        let application_date = sqlx::query_scalar::<_, NaiveDate>(
            "INSERT INTO applications (worker_id, job_offer_id, status, date, wage_offer)
             VALUES ($1, $2, $3, CURRENT_DATE, $4)
             RETURNING date",
        )
        .bind(worker_id)
        .bind(job_offer_id)
        .bind(ApplicationStatus::Pending.as_str())
        .bind(wage_offer)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(job_offer_id, worker_id, "application submitted");
        Ok(application_date)
    }

    /// Applies an Accepted/Refused decision to a Pending application.
    ///
    /// Accepting is the single-winner transition: the application becomes
    /// Accepted, the offer becomes Completed, and every sibling Pending
    /// application is Refused, all in one transaction holding the offer
    /// row lock. Two concurrent accepts on the same offer cannot both win.
    pub async fn decide(
        &self,
        job_offer_id: i64,
        worker_id: i64,
        decision: ApplicationStatus,
    ) -> Result<()> {
        if !decision.is_decision() {
            return Err(Error::BadRequest(
                "New status must be either 'Accepted' or 'Refused'".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let offer_status = sqlx::query_scalar::<_, String>(
            "SELECT status FROM job_offers WHERE job_offer_id = $1 FOR UPDATE",
        )
        .bind(job_offer_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::NotFound("Job offer not found".to_string()))?;

        let application_status = sqlx::query_scalar::<_, String>(
            "SELECT status FROM applications WHERE worker_id = $1 AND job_offer_id = $2",
        )
        .bind(worker_id)
        .bind(job_offer_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;

        if ApplicationStatus::parse(&application_status) != Some(ApplicationStatus::Pending) {
            return Err(Error::BadRequest(format!(
                "Application has already been {}",
                application_status.to_lowercase()
            )));
        }

        if JobOfferStatus::parse(&offer_status) != Some(JobOfferStatus::Open) {
            return Err(Error::BadRequest(
                "Job offer is no longer open".to_string(),
            ));
        }

        sqlx::query(
            "UPDATE applications SET status = $1 WHERE worker_id = $2 AND job_offer_id = $3",
        )
        .bind(decision.as_str())
        .bind(worker_id)
        .bind(job_offer_id)
        .execute(&mut *tx)
        .await?;

        if decision == ApplicationStatus::Accepted {
            sqlx::query("UPDATE job_offers SET status = $1 WHERE job_offer_id = $2")
                .bind(JobOfferStatus::Completed.as_str())
                .bind(job_offer_id)
                .execute(&mut *tx)
                .await?;

            sqlx::query(
                "UPDATE applications SET status = $1 WHERE job_offer_id = $2 AND status = $3",
            )
            .bind(ApplicationStatus::Refused.as_str())
            .bind(job_offer_id)
            .bind(ApplicationStatus::Pending.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::info!(
            job_offer_id,
            worker_id,
            decision = decision.as_str(),
            "application decided"
        );
        Ok(())
    }
}
