use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPool};
use sqlx::query::QueryAs;
use sqlx::Postgres;
use tokio::sync::RwLock;
use tracing::{debug, error};

use shared_database::is_unique_violation;

use crate::models::{Doctor, DoctorError, NewDoctor, PROFILE_SLUG_CONSTRAINT};
use crate::services::query::{DoctorQuery, SqlParam};

/// Storage seam for doctor records.
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Number of doctors matching the query's predicates.
    async fn count(&self, query: &DoctorQuery) -> Result<i64, DoctorError>;

    /// One page of matching doctors, in the query's sort order.
    async fn fetch_page(&self, query: &DoctorQuery) -> Result<Vec<Doctor>, DoctorError>;

    /// Insert a doctor and return the stored row.
    async fn insert(&self, doctor: NewDoctor) -> Result<Doctor, DoctorError>;
}

const INSERT_DOCTOR: &str = "INSERT INTO doctors (name, specialization, experience_years, \
    languages_spoken, gender, consultation_fee, availability_days, consultation_types, \
    image_url, next_available_slot, rating, profile_slug) \
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
    RETURNING *";

pub struct PgDoctorRepository {
    pool: PgPool,
}

impl PgDoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn bind_params<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    params: Vec<SqlParam>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Text(value) => query.bind(value),
            SqlParam::Int(value) => query.bind(value),
            SqlParam::BigInt(value) => query.bind(value),
        };
    }
    query
}

fn store_error(err: sqlx::Error) -> DoctorError {
    error!("Doctor store error: {}", err);
    DoctorError::Store(err.to_string())
}

#[async_trait]
impl DoctorRepository for PgDoctorRepository {
    async fn count(&self, query: &DoctorQuery) -> Result<i64, DoctorError> {
        let statement = query.count_statement();
        debug!("Counting doctors: {} {:?}", statement.sql, statement.params);

        let (total,): (i64,) = bind_params(sqlx::query_as(&statement.sql), statement.params)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(total)
    }

    async fn fetch_page(&self, query: &DoctorQuery) -> Result<Vec<Doctor>, DoctorError> {
        let statement = query.page_statement();
        debug!("Fetching doctors: {} {:?}", statement.sql, statement.params);

        bind_params(sqlx::query_as::<_, Doctor>(&statement.sql), statement.params)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)
    }

    async fn insert(&self, doctor: NewDoctor) -> Result<Doctor, DoctorError> {
        debug!("Inserting doctor with slug {}", doctor.profile_slug);
        let slug = doctor.profile_slug.clone();

        sqlx::query_as::<_, Doctor>(INSERT_DOCTOR)
            .bind(doctor.name)
            .bind(doctor.specialization)
            .bind(doctor.experience_years)
            .bind(doctor.languages_spoken)
            .bind(doctor.gender)
            .bind(doctor.consultation_fee)
            .bind(doctor.availability_days)
            .bind(doctor.consultation_types)
            .bind(doctor.image_url)
            .bind(doctor.next_available_slot)
            .bind(doctor.rating)
            .bind(doctor.profile_slug)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err, PROFILE_SLUG_CONSTRAINT) {
                    DoctorError::SlugConflict(slug)
                } else {
                    store_error(err)
                }
            })
    }
}

/// Process-local repository. Applies the same predicates and ordering as
/// the SQL statements and enforces slug uniqueness.
#[derive(Default)]
pub struct MemoryDoctorRepository {
    doctors: RwLock<Vec<Doctor>>,
}

impl MemoryDoctorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        Self {
            doctors: RwLock::new(doctors),
        }
    }

    pub async fn len(&self) -> usize {
        self.doctors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.doctors.read().await.is_empty()
    }
}

#[async_trait]
impl DoctorRepository for MemoryDoctorRepository {
    async fn count(&self, query: &DoctorQuery) -> Result<i64, DoctorError> {
        let doctors = self.doctors.read().await;
        Ok(doctors.iter().filter(|d| query.matches(d)).count() as i64)
    }

    async fn fetch_page(&self, query: &DoctorQuery) -> Result<Vec<Doctor>, DoctorError> {
        // Postgres rejects these before running the query.
        if query.limit() < 0 {
            return Err(DoctorError::Store("LIMIT must not be negative".to_string()));
        }
        if query.offset() < 0 {
            return Err(DoctorError::Store("OFFSET must not be negative".to_string()));
        }

        let doctors = self.doctors.read().await;
        let mut matching: Vec<Doctor> = doctors.iter().filter(|d| query.matches(d)).cloned().collect();
        matching.sort_by(|a, b| query.sort().compare(a, b));

        Ok(matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect())
    }

    async fn insert(&self, doctor: NewDoctor) -> Result<Doctor, DoctorError> {
        let mut doctors = self.doctors.write().await;

        if doctors.iter().any(|d| d.profile_slug == doctor.profile_slug) {
            return Err(DoctorError::SlugConflict(doctor.profile_slug));
        }

        let id = doctors.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let stored = doctor.into_doctor(id);
        doctors.push(stored.clone());
        Ok(stored)
    }
}
