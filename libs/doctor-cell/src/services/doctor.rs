use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::models::{
    total_pages, CreateDoctorRequest, Doctor, DoctorError, DoctorListQuery, DoctorListResponse,
    NewDoctor, DEFAULT_IMAGE_URL, DEFAULT_NEXT_AVAILABLE_SLOT, DEFAULT_RATING,
    DEFAULT_SPECIALIZATION,
};
use crate::services::query::DoctorQuery;
use crate::services::repository::DoctorRepository;
use crate::services::slug::profile_slug;

pub struct DoctorService {
    repository: Arc<dyn DoctorRepository>,
    default_limit: i64,
}

impl DoctorService {
    pub fn new(repository: Arc<dyn DoctorRepository>, default_limit: i64) -> Self {
        Self {
            repository,
            default_limit,
        }
    }

    /// List one page of doctors plus pagination metadata
    pub async fn list_doctors(&self, params: &DoctorListQuery) -> Result<DoctorListResponse, DoctorError> {
        let query = DoctorQuery::from_params(params, self.default_limit)?;
        debug!(
            "Listing doctors: {} predicates, sort {}, page {}, limit {}",
            query.predicates().len(),
            query.sort().as_str(),
            query.page(),
            query.limit()
        );

        let doctors = self.repository.fetch_page(&query).await?;
        let total_doctors = self.repository.count(&query).await?;

        Ok(DoctorListResponse {
            doctors,
            current_page: query.page(),
            total_pages: total_pages(total_doctors, query.limit()),
            total_doctors,
        })
    }

    /// Validate and store a new doctor, deriving its profile slug
    pub async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        let new_doctor = prepare_doctor(request, Utc::now().timestamp_millis())?;
        debug!("Creating doctor profile: {}", new_doctor.profile_slug);

        let doctor = self.repository.insert(new_doctor).await?;
        info!("Doctor {} created with slug {}", doctor.id, doctor.profile_slug);

        Ok(doctor)
    }
}

/// Apply creation defaults and check required fields. Whitespace-only
/// strings count as missing; a zero experience or fee is accepted.
pub fn prepare_doctor(request: CreateDoctorRequest, timestamp_millis: i64) -> Result<NewDoctor, DoctorError> {
    let name = non_blank(request.name);
    let gender = non_blank(request.gender);

    let (Some(name), Some(experience_years), Some(gender), Some(consultation_fee)) =
        (name, request.experience_years, gender, request.consultation_fee)
    else {
        return Err(DoctorError::MissingRequiredFields);
    };

    let profile_slug = profile_slug(&name, timestamp_millis);

    Ok(NewDoctor {
        specialization: non_blank(request.specialization)
            .unwrap_or_else(|| DEFAULT_SPECIALIZATION.to_string()),
        experience_years,
        languages_spoken: request.languages_spoken.unwrap_or_default(),
        gender,
        consultation_fee,
        availability_days: request.availability_days.unwrap_or_default(),
        consultation_types: request.consultation_types.unwrap_or_default(),
        image_url: request.image_url.unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        next_available_slot: request
            .next_available_slot
            .unwrap_or_else(|| DEFAULT_NEXT_AVAILABLE_SLOT.to_string()),
        rating: request.rating.unwrap_or(DEFAULT_RATING),
        profile_slug,
        name,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
