use crate::database::is_unique_violation;
use crate::dto::company_dto::{AddLocationPayload, CreateCompanyPayload};
use crate::error::{Error, Result};
use sqlx::PgPool;

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn employer_exists<'e, E>(executor: E, user_id: i64) -> Result<bool>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employers WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }

    /// Creates the company and binds the founding employer to it as a new
    /// membership row, in one transaction.
    pub async fn create_company(
        &self,
        employer_id: i64,
        payload: CreateCompanyPayload,
    ) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        if !Self::employer_exists(&mut *tx, employer_id).await? {
            return Err(Error::NotFound("Employer not found".to_string()));
        }

        let company_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO companies (created_by, name, location)
             VALUES ($1, $2, $3)
             RETURNING company_id",
        )
        .bind(employer_id)
        .bind(&payload.name)
        .bind(&payload.location)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO employers (user_id, company_id) VALUES ($1, $2)")
            .bind(employer_id)
            .bind(company_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(company_id, employer_id, "created company");
        Ok(company_id)
    }

    /// Adds a membership row. Employers may belong to several companies,
    /// but only once to each.
    pub async fn join_company(&self, company_id: i64, employer_id: i64) -> Result<()> {
        if !Self::employer_exists(&self.pool, employer_id).await? {
            return Err(Error::NotFound("Employer not found".to_string()));
        }

        let company_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE company_id = $1)",
        )
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;
        if !company_exists {
            return Err(Error::NotFound("Company not found".to_string()));
        }

        let already_member = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employers WHERE user_id = $1 AND company_id = $2)",
        )
        .bind(employer_id)
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;
        if already_member {
            return Err(Error::Conflict(
                "Employer is already a member of this company".to_string(),
            ));
        }

        let inserted = sqlx::query("INSERT INTO employers (user_id, company_id) VALUES ($1, $2)")
            .bind(employer_id)
            .bind(company_id)
            .execute(&self.pool)
            .await;

        match inserted {
            Ok(_) => Ok(()),
            // Concurrent join of the same pair loses the race on the
            // (user_id, company_id) unique constraint.
            Err(err) if is_unique_violation(&err) => Err(Error::Conflict(
                "Employer is already a member of this company".to_string(),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Clears the membership's company instead of deleting the row.
    pub async fn quit_company(&self, employer_id: i64, company_id: i64) -> Result<()> {
        let result =
            sqlx::query("UPDATE employers SET company_id = NULL WHERE user_id = $1 AND company_id = $2")
                .bind(employer_id)
                .bind(company_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(Error::BadRequest(
                "Employer is not part of this company".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn add_location(&self, company_id: i64, payload: AddLocationPayload) -> Result<i64> {
        let company_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE company_id = $1)",
        )
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;
        if !company_exists {
            return Err(Error::NotFound("Company not found".to_string()));
        }

        let location_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO locations (company_id, number, street, city)
             VALUES ($1, $2, $3, $4)
             RETURNING location_id",
        )
        .bind(company_id)
        .bind(&payload.number)
        .bind(&payload.street)
        .bind(&payload.city)
        .fetch_one(&self.pool)
        .await?;

        Ok(location_id)
    }

    /// Deletes a location unless it is the company's last one or still has
    /// job offers attached. The company row is locked for the duration so
    /// two concurrent deletes cannot both pass the last-location check.
    pub async fn delete_location(&self, company_id: i64, location_id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let company = sqlx::query_scalar::<_, i64>(
            "SELECT company_id FROM companies WHERE company_id = $1 FOR UPDATE",
        )
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?;
        if company.is_none() {
            return Err(Error::NotFound("Company not found".to_string()));
        }

        let belongs = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM locations WHERE location_id = $1 AND company_id = $2)",
        )
        .bind(location_id)
        .bind(company_id)
        .fetch_one(&mut *tx)
        .await?;
        if !belongs {
            return Err(Error::NotFound(
                "Location not found for this company".to_string(),
            ));
        }

        let location_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM locations WHERE company_id = $1")
                .bind(company_id)
                .fetch_one(&mut *tx)
                .await?;
        if location_count <= 1 {
            return Err(Error::BadRequest(
                "Cannot delete the only location of a company".to_string(),
            ));
        }

        let has_offers = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM job_offers WHERE location_id = $1)",
        )
        .bind(location_id)
        .fetch_one(&mut *tx)
        .await?;
        if has_offers {
            return Err(Error::BadRequest(
                "Location still has job offers attached".to_string(),
            ));
        }

        sqlx::query("DELETE FROM locations WHERE location_id = $1")
            .bind(location_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
