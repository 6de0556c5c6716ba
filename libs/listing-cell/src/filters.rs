use serde::{Deserialize, Serialize};

/// A labelled choice in one of the filter dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> FilterOption {
    FilterOption { value, label }
}

pub const SORT_OPTIONS: [FilterOption; 5] = [
    option("rating_desc", "Relevance (Rating)"),
    option("experience_desc", "Experience: High to Low"),
    option("experience_asc", "Experience: Low to High"),
    option("fee_asc", "Price: Low to High"),
    option("fee_desc", "Price: High to Low"),
];

pub const GENDER_OPTIONS: [FilterOption; 3] = [
    option("Any", "Any"),
    option("Male", "Male"),
    option("Female", "Female"),
];

pub const AVAILABILITY_OPTIONS: [FilterOption; 4] = [
    option("", "Any"),
    option("Today", "Today"),
    option("Tomorrow", "Tomorrow"),
    option("Next 7 days", "Next 7 days"),
];

pub const CONSULTATION_TYPE_OPTIONS: [FilterOption; 3] = [
    option("", "Any"),
    option("Video", "Video Consultation"),
    option("In-person", "In-Person Visit"),
];

pub const EXPERIENCE_RANGES: [FilterOption; 5] = [
    option("", "Any Experience"),
    option("0-5", "0-5 Years"),
    option("6-10", "6-10 Years"),
    option("11-15", "11-15 Years"),
    option("15+", "15+ Years"),
];

pub const FEE_RANGES: [FilterOption; 5] = [
    option("", "Any Fee"),
    option("0-300", "₹0 - ₹300"),
    option("301-500", "₹301 - ₹500"),
    option("501-800", "₹501 - ₹800"),
    option("800+", "₹800+"),
];

/// Upper bound used for the open-ended `15+` experience preset.
pub const EXPERIENCE_CEILING: &str = "100";
/// Upper bound used for the open-ended `800+` fee preset.
pub const FEE_CEILING: &str = "10000";

/// Current filter selections. Values are kept as strings, exactly as the
/// form submits them; an empty string means "not filtered".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub sort_by: String,
    pub gender: String,
    pub availability: String,
    pub consultation_type: String,
    pub language: String,
    pub min_experience: String,
    pub max_experience: String,
    pub min_fee: String,
    pub max_fee: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            sort_by: "rating_desc".to_string(),
            gender: "Any".to_string(),
            availability: String::new(),
            consultation_type: String::new(),
            language: String::new(),
            min_experience: String::new(),
            max_experience: String::new(),
            min_fee: String::new(),
            max_fee: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    SortBy,
    Gender,
    Availability,
    ConsultationType,
    Language,
    MinExperience,
    MaxExperience,
    MinFee,
    MaxFee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Set(FilterField, String),
    /// One of the [`EXPERIENCE_RANGES`] values; sets both bounds.
    ExperienceRange(String),
    /// One of the [`FEE_RANGES`] values; sets both bounds.
    FeeRange(String),
    Reset,
}

impl FilterState {
    /// Pure transition: returns the state after `change`.
    pub fn apply(&self, change: FilterChange) -> FilterState {
        let mut next = self.clone();
        match change {
            FilterChange::Set(field, value) => *next.field_mut(field) = value,
            FilterChange::ExperienceRange(preset) => {
                let (min, max) = split_range(&preset, EXPERIENCE_CEILING);
                next.min_experience = min;
                next.max_experience = max;
            }
            FilterChange::FeeRange(preset) => {
                let (min, max) = split_range(&preset, FEE_CEILING);
                next.min_fee = min;
                next.max_fee = max;
            }
            FilterChange::Reset => next = FilterState::default(),
        }
        next
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::SortBy => &self.sort_by,
            FilterField::Gender => &self.gender,
            FilterField::Availability => &self.availability,
            FilterField::ConsultationType => &self.consultation_type,
            FilterField::Language => &self.language,
            FilterField::MinExperience => &self.min_experience,
            FilterField::MaxExperience => &self.max_experience,
            FilterField::MinFee => &self.min_fee,
            FilterField::MaxFee => &self.max_fee,
        }
    }

    fn field_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::SortBy => &mut self.sort_by,
            FilterField::Gender => &mut self.gender,
            FilterField::Availability => &mut self.availability,
            FilterField::ConsultationType => &mut self.consultation_type,
            FilterField::Language => &mut self.language,
            FilterField::MinExperience => &mut self.min_experience,
            FilterField::MaxExperience => &mut self.max_experience,
            FilterField::MinFee => &mut self.min_fee,
            FilterField::MaxFee => &mut self.max_fee,
        }
    }

    /// The experience preset matching the current bounds.
    pub fn experience_range(&self) -> String {
        join_range(&self.min_experience, &self.max_experience, "15", EXPERIENCE_CEILING)
    }

    /// The fee preset matching the current bounds.
    pub fn fee_range(&self) -> String {
        join_range(&self.min_fee, &self.max_fee, "800", FEE_CEILING)
    }

    /// Query string pairs for `GET /doctors`: paging and specialization,
    /// then [`FilterState::filter_pairs`].
    pub fn to_query_pairs(&self, page: i64, limit: i64, specialization: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("specialization", specialization.to_string()),
        ];
        pairs.extend(self.filter_pairs());
        pairs
    }

    /// The active filters as query pairs. Empty values and gender `Any`
    /// are left out.
    pub fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let optional = [
            ("sortBy", &self.sort_by),
            ("gender", &self.gender),
            ("availability", &self.availability),
            ("consultationType", &self.consultation_type),
            ("language", &self.language),
            ("minExperience", &self.min_experience),
            ("maxExperience", &self.max_experience),
            ("minFee", &self.min_fee),
            ("maxFee", &self.max_fee),
        ];

        for (key, value) in optional {
            if value.is_empty() || (key == "gender" && value == "Any") {
                continue;
            }
            pairs.push((key, value.clone()));
        }

        pairs
    }
}

fn split_range(preset: &str, ceiling: &str) -> (String, String) {
    if let Some(min) = preset.strip_suffix('+') {
        return (min.to_string(), ceiling.to_string());
    }
    match preset.split_once('-') {
        Some((min, max)) => (min.to_string(), max.to_string()),
        None => (preset.to_string(), String::new()),
    }
}

fn join_range(min: &str, max: &str, open_min: &str, ceiling: &str) -> String {
    match (min, max) {
        ("", "") => String::new(),
        (min, max) if min == open_min && max == ceiling => format!("{}+", open_min),
        (min, max) => format!("{}-{}", min, max),
    }
}
