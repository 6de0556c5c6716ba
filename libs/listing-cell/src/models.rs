use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const LISTING_SPECIALIZATION: &str = "General Physician / Internal Medicine";

/// Languages offered when no doctors could be loaded.
pub const FALLBACK_LANGUAGES: [&str; 2] = ["English", "Hindi"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub experience_years: i32,
    #[serde(default)]
    pub languages_spoken: Vec<String>,
    pub gender: String,
    pub consultation_fee: i32,
    #[serde(default)]
    pub availability_days: Vec<String>,
    #[serde(default)]
    pub consultation_types: Vec<String>,
    pub image_url: String,
    pub next_available_slot: String,
    pub rating: f64,
    pub profile_slug: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPage {
    pub doctors: Vec<Doctor>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_doctors: i64,
}

/// Sorted, de-duplicated languages spoken across `doctors`.
pub fn unique_languages(doctors: &[Doctor]) -> Vec<String> {
    doctors
        .iter()
        .flat_map(|d| d.languages_spoken.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn fallback_languages() -> Vec<String> {
    FALLBACK_LANGUAGES.iter().map(|l| l.to_string()).collect()
}
