use serde_json::{json, Value};

use shared_config::{AppConfig, DEFAULT_API_URL, DEFAULT_PAGE_SIZE};

pub struct TestConfig {
    pub api_base_url: String,
    pub default_page_size: i64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TestConfig {
    pub fn with_api_base_url(url: &str) -> Self {
        Self {
            api_base_url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_base_url: self.api_base_url.clone(),
            default_page_size: self.default_page_size,
            ..AppConfig::default()
        }
    }
}

/// Builder for doctor fixtures, rendered either as a create payload or as
/// a stored row the way the API returns it.
#[derive(Debug, Clone)]
pub struct TestDoctor {
    pub name: String,
    pub specialization: String,
    pub experience_years: i32,
    pub languages_spoken: Vec<String>,
    pub gender: String,
    pub consultation_fee: i32,
    pub availability_days: Vec<String>,
    pub consultation_types: Vec<String>,
    pub rating: f64,
}

impl Default for TestDoctor {
    fn default() -> Self {
        Self {
            name: "Dr. Test Physician".to_string(),
            specialization: "General Physician / Internal Medicine".to_string(),
            experience_years: 10,
            languages_spoken: vec!["English".to_string()],
            gender: "Female".to_string(),
            consultation_fee: 500,
            availability_days: vec!["Today".to_string()],
            consultation_types: vec!["Video".to_string()],
            rating: 4.5,
        }
    }
}

impl TestDoctor {
    pub fn new(name: &str, gender: &str, consultation_fee: i32) -> Self {
        Self {
            name: name.to_string(),
            gender: gender.to_string(),
            consultation_fee,
            ..Self::default()
        }
    }

    pub fn experience(mut self, years: i32) -> Self {
        self.experience_years = years;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn specialization(mut self, specialization: &str) -> Self {
        self.specialization = specialization.to_string();
        self
    }

    pub fn languages(mut self, languages: &[&str]) -> Self {
        self.languages_spoken = languages.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn slug(&self, id: i32) -> String {
        format!("{}-{:04}", self.name.to_lowercase().replace(' ', "-"), id)
    }

    pub fn to_create_payload(&self) -> Value {
        json!({
            "name": self.name,
            "specialization": self.specialization,
            "experience_years": self.experience_years,
            "languages_spoken": self.languages_spoken,
            "gender": self.gender,
            "consultation_fee": self.consultation_fee,
            "availability_days": self.availability_days,
            "consultation_types": self.consultation_types,
            "rating": self.rating
        })
    }

    pub fn to_row(&self, id: i32) -> Value {
        json!({
            "id": id,
            "name": self.name,
            "specialization": self.specialization,
            "experience_years": self.experience_years,
            "languages_spoken": self.languages_spoken,
            "gender": self.gender,
            "consultation_fee": self.consultation_fee,
            "availability_days": self.availability_days,
            "consultation_types": self.consultation_types,
            "image_url": "https://via.placeholder.com/80",
            "next_available_slot": "Tomorrow, 10:00 AM",
            "rating": self.rating,
            "profile_slug": self.slug(id)
        })
    }
}

pub struct MockApiResponses;

impl MockApiResponses {
    pub fn doctor_page(doctors: &[TestDoctor], current_page: i64, total_pages: i64, total_doctors: i64) -> Value {
        let rows: Vec<Value> = doctors
            .iter()
            .enumerate()
            .map(|(i, doctor)| doctor.to_row(i as i32 + 1))
            .collect();

        json!({
            "doctors": rows,
            "currentPage": current_page,
            "totalPages": total_pages,
            "totalDoctors": total_doctors
        })
    }

    pub fn error_response(message: &str, detail: &str) -> Value {
        json!({
            "message": message,
            "error": detail
        })
    }
}
