//! CSV seed import. One file per table, headers using the legacy
//! generator's column names (`User.csv`, `Company.csv`, ...). Rows whose
//! primary key already exists are skipped, and the identity sequences are
//! realigned afterwards so API inserts continue past the imported ids.

use crate::error::Result;
use crate::models::application::ApplicationStatus;
use crate::models::job_offer::JobOfferStatus;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct UserRecord {
    #[serde(rename = "UserID")]
    user_id: i64,
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "Surname")]
    surname: String,
    // Older exports omit the precomputed display name.
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "PhoneNumber")]
    phone_number: String,
}

impl UserRecord {
    fn full_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.first_name, self.surname))
    }
}

#[derive(Debug, Deserialize)]
struct CompanyRecord {
    #[serde(rename = "CompanyID")]
    company_id: i64,
    #[serde(rename = "CreatedBy")]
    created_by: i64,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Location")]
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmployerRecord {
    #[serde(rename = "CompanyID", alias = "Company")]
    company_id: Option<i64>,
    #[serde(rename = "UserID")]
    user_id: i64,
}

#[derive(Debug, Deserialize)]
struct WorkerRecord {
    #[serde(rename = "UserID")]
    user_id: i64,
    #[serde(rename = "Experiences")]
    experiences: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    #[serde(rename = "LocationID")]
    location_id: i64,
    #[serde(rename = "CompanyID", alias = "Company")]
    company_id: i64,
    #[serde(rename = "Number")]
    number: String,
    #[serde(rename = "Street")]
    street: String,
    #[serde(rename = "City")]
    city: String,
}

#[derive(Debug, Deserialize)]
struct JobOfferRecord {
    #[serde(rename = "JobOfferID")]
    job_offer_id: i64,
    #[serde(rename = "LocationID", alias = "Location")]
    location_id: i64,
    #[serde(rename = "CreatedBy")]
    created_by: i64,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "StartTime")]
    start_time: NaiveTime,
    #[serde(rename = "EndTime")]
    end_time: NaiveTime,
    #[serde(rename = "MaxWage")]
    max_wage: Decimal,
    #[serde(rename = "WorkingDays")]
    working_days: i32,
    #[serde(rename = "Hours")]
    hours: i32,
}

#[derive(Debug, Deserialize)]
struct ApplicationRecord {
    #[serde(rename = "WorkerID")]
    worker_id: i64,
    #[serde(rename = "JobOfferID")]
    job_offer_id: i64,
    // The oldest exports predate application statuses.
    #[serde(rename = "Status")]
    status: Option<String>,
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "WageOffer")]
    wage_offer: Decimal,
}

/// Canonical offer status for a raw CSV value. Legacy exports used
/// "closed" for offers that had run their course.
fn canonical_offer_status(raw: &str) -> &'static str {
    if let Some(status) = JobOfferStatus::parse(raw) {
        return status.as_str();
    }
    if raw.eq_ignore_ascii_case("closed") {
        return JobOfferStatus::Completed.as_str();
    }
    tracing::warn!(status = raw, "unknown job offer status in seed data, defaulting to Open");
    JobOfferStatus::Open.as_str()
}

fn canonical_application_status(raw: Option<&str>) -> &'static str {
    match raw.and_then(ApplicationStatus::parse) {
        Some(status) => status.as_str(),
        None => ApplicationStatus::Pending.as_str(),
    }
}

/// Imports every recognized CSV file from `dir` in foreign-key order.
pub async fn import_dir(pool: &PgPool, dir: &Path) -> Result<()> {
    let users = import_users(pool, &dir.join("User.csv")).await?;
    let companies = import_companies(pool, &dir.join("Company.csv")).await?;
    let employers = import_employers(pool, &dir.join("Employer.csv")).await?;
    let workers = import_workers(pool, &dir.join("Worker.csv")).await?;
    let locations = import_locations(pool, &dir.join("Location.csv")).await?;
    let job_offers = import_job_offers(pool, &dir.join("JobOffer.csv")).await?;
    let applications = import_applications(pool, &dir.join("Application.csv")).await?;

    realign_sequences(pool).await?;

    tracing::info!(
        users,
        companies,
        employers,
        workers,
        locations,
        job_offers,
        applications,
        "seed import finished"
    );
    Ok(())
}

async fn import_users(pool: &PgPool, path: &Path) -> Result<u64> {
    if !path.exists() {
        return Ok(0);
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut inserted = 0;
    for record in reader.deserialize() {
        let record: UserRecord = record?;
        let result = sqlx::query(
            "INSERT INTO users (user_id, first_name, surname, name, email, phone_number)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(record.user_id)
        .bind(&record.first_name)
        .bind(&record.surname)
        .bind(record.full_name())
        .bind(&record.email)
        .bind(&record.phone_number)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

async fn import_companies(pool: &PgPool, path: &Path) -> Result<u64> {
    if !path.exists() {
        return Ok(0);
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut inserted = 0;
    for record in reader.deserialize() {
        let record: CompanyRecord = record?;
        let result = sqlx::query(
            "INSERT INTO companies (company_id, created_by, name, location)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (company_id) DO NOTHING",
        )
        .bind(record.company_id)
        .bind(record.created_by)
        .bind(&record.name)
        .bind(&record.location)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

async fn import_employers(pool: &PgPool, path: &Path) -> Result<u64> {
    if !path.exists() {
        return Ok(0);
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut inserted = 0;
    for record in reader.deserialize() {
        let record: EmployerRecord = record?;
        // The membership table has no natural key in the CSV, so skip
        // duplicates with an explicit existence check (NULL-safe).
        let result = sqlx::query(
            "INSERT INTO employers (user_id, company_id)
             SELECT $1, $2
             WHERE NOT EXISTS (
                 SELECT 1 FROM employers
                 WHERE user_id = $1 AND company_id IS NOT DISTINCT FROM $2
             )",
        )
        .bind(record.user_id)
        .bind(record.company_id)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

async fn import_workers(pool: &PgPool, path: &Path) -> Result<u64> {
    if !path.exists() {
        return Ok(0);
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut inserted = 0;
    for record in reader.deserialize() {
        let record: WorkerRecord = record?;
        let result = sqlx::query(
            "INSERT INTO workers (user_id, experiences, description)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(record.user_id)
        .bind(&record.experiences)
        .bind(&record.description)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

async fn import_locations(pool: &PgPool, path: &Path) -> Result<u64> {
    if !path.exists() {
        return Ok(0);
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut inserted = 0;
    for record in reader.deserialize() {
        let record: LocationRecord = record?;
        let result = sqlx::query(
            "INSERT INTO locations (location_id, company_id, number, street, city)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (location_id) DO NOTHING",
        )
        .bind(record.location_id)
        .bind(record.company_id)
        .bind(&record.number)
        .bind(&record.street)
        .bind(&record.city)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

async fn import_job_offers(pool: &PgPool, path: &Path) -> Result<u64> {
    if !path.exists() {
        return Ok(0);
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut inserted = 0;
    for record in reader.deserialize() {
        let record: JobOfferRecord = record?;
        let result = sqlx::query(
            "INSERT INTO job_offers
                 (job_offer_id, location_id, created_by, status, date,
                  start_time, end_time, max_wage, working_days, hours)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (job_offer_id) DO NOTHING",
        )
        .bind(record.job_offer_id)
        .bind(record.location_id)
        .bind(record.created_by)
        .bind(canonical_offer_status(&record.status))
        .bind(record.date)
        .bind(record.start_time)
        .bind(record.end_time)
        .bind(record.max_wage)
        .bind(record.working_days)
        .bind(record.hours)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

async fn import_applications(pool: &PgPool, path: &Path) -> Result<u64> {
    if !path.exists() {
        return Ok(0);
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut inserted = 0;
    for record in reader.deserialize() {
        let record: ApplicationRecord = record?;
        let result = sqlx::query(
            "INSERT INTO applications (worker_id, job_offer_id, status, date, wage_offer)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (worker_id, job_offer_id) DO NOTHING",
        )
        .bind(record.worker_id)
        .bind(record.job_offer_id)
        .bind(canonical_application_status(record.status.as_deref()))
        .bind(record.date)
        .bind(record.wage_offer)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}

async fn realign_sequences(pool: &PgPool) -> Result<()> {
    for (table, column) in [
        ("users", "user_id"),
        ("companies", "company_id"),
        ("locations", "location_id"),
        ("job_offers", "job_offer_id"),
    ] {
        let statement = format!(
            "SELECT setval(pg_get_serial_sequence('{table}', '{column}'), \
             COALESCE(MAX({column}), 0) + 1, false) FROM {table}"
        );
        sqlx::query(&statement).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one<T: serde::de::DeserializeOwned>(csv_text: &str) -> T {
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        reader.deserialize().next().unwrap().unwrap()
    }

    #[test]
    fn user_record_without_name_column_gets_a_composed_name() {
        let record: UserRecord = parse_one(
            "UserID,FirstName,Surname,Email,PhoneNumber\n\
             7,Ada,Lovelace,ada@example.com,5551234567\n",
        );
        assert_eq!(record.full_name(), "Ada Lovelace");
    }

    #[test]
    fn employer_record_accepts_both_header_variants() {
        let with_alias: EmployerRecord = parse_one("Company,UserID\n3,9\n");
        assert_eq!(with_alias.company_id, Some(3));

        let unaffiliated: EmployerRecord = parse_one("CompanyID,UserID\n,9\n");
        assert_eq!(unaffiliated.company_id, None);
        assert_eq!(unaffiliated.user_id, 9);
    }

    #[test]
    fn job_offer_record_parses_dates_and_times() {
        let record: JobOfferRecord = parse_one(
            "JobOfferID,LocationID,CreatedBy,Status,Date,StartTime,EndTime,MaxWage,WorkingDays,Hours\n\
             1,1,1,Open,2023-12-01,09:00:00,17:00:00,45.00,5,8\n",
        );
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert_eq!(record.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(record.max_wage, Decimal::new(4500, 2));
    }

    #[test]
    fn legacy_closed_offers_become_completed() {
        assert_eq!(canonical_offer_status("closed"), "Completed");
        assert_eq!(canonical_offer_status("Open"), "Open");
        assert_eq!(canonical_offer_status("running"), "Running");
    }

    #[test]
    fn applications_without_status_default_to_pending() {
        let record: ApplicationRecord = parse_one(
            "WorkerID,JobOfferID,Date,WageOffer\n\
             2,1,2023-12-02,42.00\n",
        );
        assert_eq!(record.status, None);
        assert_eq!(canonical_application_status(record.status.as_deref()), "Pending");
        assert_eq!(canonical_application_status(Some("accepted")), "Accepted");
    }
}
