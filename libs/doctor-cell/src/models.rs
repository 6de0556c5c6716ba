use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_SPECIALIZATION: &str = "General Physician / Internal Medicine";
pub const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/80";
pub const DEFAULT_NEXT_AVAILABLE_SLOT: &str = "Tomorrow, 10:00 AM";
pub const DEFAULT_RATING: f64 = 4.5;
pub const DEFAULT_PAGE: i64 = 1;

/// Name of the unique constraint guarding `profile_slug`.
pub const PROFILE_SLUG_CONSTRAINT: &str = "doctors_profile_slug_key";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub specialization: String,
    pub experience_years: i32,
    pub languages_spoken: Vec<String>,
    pub gender: String,
    pub consultation_fee: i32,
    pub availability_days: Vec<String>,
    pub consultation_types: Vec<String>,
    pub image_url: String,
    pub next_available_slot: String,
    pub rating: f64,
    pub profile_slug: String,
}

/// A validated doctor ready to be inserted. The store assigns `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    pub experience_years: i32,
    pub languages_spoken: Vec<String>,
    pub gender: String,
    pub consultation_fee: i32,
    pub availability_days: Vec<String>,
    pub consultation_types: Vec<String>,
    pub image_url: String,
    pub next_available_slot: String,
    pub rating: f64,
    pub profile_slug: String,
}

impl NewDoctor {
    pub fn into_doctor(self, id: i32) -> Doctor {
        Doctor {
            id,
            name: self.name,
            specialization: self.specialization,
            experience_years: self.experience_years,
            languages_spoken: self.languages_spoken,
            gender: self.gender,
            consultation_fee: self.consultation_fee,
            availability_days: self.availability_days,
            consultation_types: self.consultation_types,
            image_url: self.image_url,
            next_available_slot: self.next_available_slot,
            rating: self.rating,
            profile_slug: self.profile_slug,
        }
    }
}

/// Body of `POST /api/doctors/add`. Every field is optional on the wire so
/// that a missing required field is reported as a 400 with a readable
/// message rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub languages_spoken: Option<Vec<String>>,
    pub gender: Option<String>,
    pub consultation_fee: Option<i32>,
    pub availability_days: Option<Vec<String>>,
    pub consultation_types: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub next_available_slot: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorResponse {
    pub message: String,
    pub doctor: Doctor,
}

/// Raw query string of `GET /api/doctors`. Values stay strings until the
/// query builder parses them so that empty values can be treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub gender: Option<String>,
    pub availability: Option<String>,
    pub consultation_type: Option<String>,
    pub language: Option<String>,
    pub min_experience: Option<String>,
    pub max_experience: Option<String>,
    pub min_fee: Option<String>,
    pub max_fee: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorListResponse {
    pub doctors: Vec<Doctor>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_doctors: i64,
}

/// `ceil(total / limit)`. A non-positive limit yields zero pages.
pub fn total_pages(total_doctors: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    total_doctors / limit + i64::from(total_doctors % limit != 0)
}

#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    #[error("Missing required fields: name, experience_years, gender, consultation_fee")]
    MissingRequiredFields,

    #[error("Invalid value for {field}: {value:?}")]
    InvalidParameter { field: &'static str, value: String },

    #[error("Doctor with similar name (slug) already exists. Try a more unique name.")]
    SlugConflict(String),

    #[error("{0}")]
    Store(String),
}
