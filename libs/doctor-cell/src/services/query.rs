//! Typed construction of the doctor listing queries.
//!
//! Every optional filter becomes either one [`Predicate`] or nothing. The
//! count and page statements are rendered from the same predicate list, and
//! placeholder numbers come from a predicate's position in that list, so the
//! two statements always share an identical parameter prefix.

use std::cmp::Ordering;

use crate::models::{Doctor, DoctorError, DoctorListQuery, DEFAULT_PAGE, DEFAULT_SPECIALIZATION};

const SELECT_DOCTORS: &str = "SELECT * FROM doctors";
const COUNT_DOCTORS: &str = "SELECT COUNT(*) FROM doctors";

/// A bound value, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    BigInt(i64),
}

/// A rendered SQL statement with its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Specialization(String),
    Gender(String),
    AvailableOn(String),
    ConsultationType(String),
    Speaks(String),
    MinExperience(i32),
    MaxExperience(i32),
    MinFee(i32),
    MaxFee(i32),
}

impl Predicate {
    /// Render this predicate against placeholder `$n`.
    pub fn to_sql(&self, n: usize) -> String {
        match self {
            Predicate::Specialization(_) => format!("specialization = ${}", n),
            Predicate::Gender(_) => format!("gender = ${}", n),
            Predicate::AvailableOn(_) => format!("${} = ANY(availability_days)", n),
            Predicate::ConsultationType(_) => format!("${} = ANY(consultation_types)", n),
            Predicate::Speaks(_) => format!("${} = ANY(languages_spoken)", n),
            Predicate::MinExperience(_) => format!("experience_years >= ${}", n),
            Predicate::MaxExperience(_) => format!("experience_years <= ${}", n),
            Predicate::MinFee(_) => format!("consultation_fee >= ${}", n),
            Predicate::MaxFee(_) => format!("consultation_fee <= ${}", n),
        }
    }

    pub fn param(&self) -> SqlParam {
        match self {
            Predicate::Specialization(value)
            | Predicate::Gender(value)
            | Predicate::AvailableOn(value)
            | Predicate::ConsultationType(value)
            | Predicate::Speaks(value) => SqlParam::Text(value.clone()),
            Predicate::MinExperience(value)
            | Predicate::MaxExperience(value)
            | Predicate::MinFee(value)
            | Predicate::MaxFee(value) => SqlParam::Int(*value),
        }
    }

    /// Evaluate the predicate the way Postgres would for the rendered SQL.
    pub fn matches(&self, doctor: &Doctor) -> bool {
        match self {
            Predicate::Specialization(value) => doctor.specialization == *value,
            Predicate::Gender(value) => doctor.gender == *value,
            Predicate::AvailableOn(value) => doctor.availability_days.contains(value),
            Predicate::ConsultationType(value) => doctor.consultation_types.contains(value),
            Predicate::Speaks(value) => doctor.languages_spoken.contains(value),
            Predicate::MinExperience(value) => doctor.experience_years >= *value,
            Predicate::MaxExperience(value) => doctor.experience_years <= *value,
            Predicate::MinFee(value) => doctor.consultation_fee >= *value,
            Predicate::MaxFee(value) => doctor.consultation_fee <= *value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    RatingDesc,
    ExperienceDesc,
    ExperienceAsc,
    FeeAsc,
    FeeDesc,
}

impl SortKey {
    /// Unknown or absent keys fall back to rating.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("experience_desc") => SortKey::ExperienceDesc,
            Some("experience_asc") => SortKey::ExperienceAsc,
            Some("fee_asc") => SortKey::FeeAsc,
            Some("fee_desc") => SortKey::FeeDesc,
            _ => SortKey::RatingDesc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::RatingDesc => "rating_desc",
            SortKey::ExperienceDesc => "experience_desc",
            SortKey::ExperienceAsc => "experience_asc",
            SortKey::FeeAsc => "fee_asc",
            SortKey::FeeDesc => "fee_desc",
        }
    }

    pub fn order_by(&self) -> &'static str {
        match self {
            SortKey::RatingDesc => "ORDER BY rating DESC, experience_years DESC",
            SortKey::ExperienceDesc => "ORDER BY experience_years DESC, rating DESC",
            SortKey::ExperienceAsc => "ORDER BY experience_years ASC, rating DESC",
            SortKey::FeeAsc => "ORDER BY consultation_fee ASC, rating DESC",
            SortKey::FeeDesc => "ORDER BY consultation_fee DESC, rating DESC",
        }
    }

    /// In-memory counterpart of [`SortKey::order_by`].
    pub fn compare(&self, a: &Doctor, b: &Doctor) -> Ordering {
        let rating_desc = || b.rating.total_cmp(&a.rating);
        match self {
            SortKey::RatingDesc => rating_desc().then(b.experience_years.cmp(&a.experience_years)),
            SortKey::ExperienceDesc => b.experience_years.cmp(&a.experience_years).then_with(rating_desc),
            SortKey::ExperienceAsc => a.experience_years.cmp(&b.experience_years).then_with(rating_desc),
            SortKey::FeeAsc => a.consultation_fee.cmp(&b.consultation_fee).then_with(rating_desc),
            SortKey::FeeDesc => b.consultation_fee.cmp(&a.consultation_fee).then_with(rating_desc),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorQuery {
    predicates: Vec<Predicate>,
    sort: SortKey,
    page: i64,
    limit: i64,
}

impl DoctorQuery {
    /// A query over one specialization with no other filters.
    pub fn new(specialization: impl Into<String>, page: i64, limit: i64) -> Self {
        Self {
            predicates: vec![Predicate::Specialization(specialization.into())],
            sort: SortKey::default(),
            page,
            limit,
        }
    }

    /// Build the query from a raw query string. Empty values are absent,
    /// gender `Any` adds no predicate, and numeric values must parse.
    pub fn from_params(params: &DoctorListQuery, default_limit: i64) -> Result<Self, DoctorError> {
        let specialization = present(&params.specialization).unwrap_or(DEFAULT_SPECIALIZATION);
        let page = parse_number("page", &params.page)?.unwrap_or(DEFAULT_PAGE);
        let limit = parse_number("limit", &params.limit)?.unwrap_or(default_limit);

        let mut query = Self::new(specialization, page, limit)
            .sorted_by(SortKey::parse(present(&params.sort_by)));

        if let Some(gender) = present(&params.gender).filter(|g| *g != "Any") {
            query = query.with(Predicate::Gender(gender.to_string()));
        }
        if let Some(day) = present(&params.availability) {
            query = query.with(Predicate::AvailableOn(day.to_string()));
        }
        if let Some(kind) = present(&params.consultation_type) {
            query = query.with(Predicate::ConsultationType(kind.to_string()));
        }
        if let Some(language) = present(&params.language) {
            query = query.with(Predicate::Speaks(language.to_string()));
        }
        if let Some(min) = parse_number("minExperience", &params.min_experience)? {
            query = query.with(Predicate::MinExperience(min));
        }
        if let Some(max) = parse_number("maxExperience", &params.max_experience)? {
            query = query.with(Predicate::MaxExperience(max));
        }
        if let Some(min) = parse_number("minFee", &params.min_fee)? {
            query = query.with(Predicate::MinFee(min));
        }
        if let Some(max) = parse_number("maxFee", &params.max_fee)? {
            query = query.with(Predicate::MaxFee(max));
        }

        Ok(query)
    }

    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// `(page - 1) * limit`, without bounds checks.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        self.predicates.iter().all(|p| p.matches(doctor))
    }

    fn where_clause(&self) -> String {
        if self.predicates.is_empty() {
            return String::new();
        }
        let clauses: Vec<String> = self
            .predicates
            .iter()
            .enumerate()
            .map(|(i, p)| p.to_sql(i + 1))
            .collect();
        format!("WHERE {}", clauses.join(" AND "))
    }

    fn filter_params(&self) -> Vec<SqlParam> {
        self.predicates.iter().map(Predicate::param).collect()
    }

    pub fn count_statement(&self) -> Statement {
        Statement {
            sql: join_sql(&[COUNT_DOCTORS, &self.where_clause()]),
            params: self.filter_params(),
        }
    }

    pub fn page_statement(&self) -> Statement {
        let limit_at = self.predicates.len() + 1;
        let pagination = format!("LIMIT ${} OFFSET ${}", limit_at, limit_at + 1);

        let mut params = self.filter_params();
        params.push(SqlParam::BigInt(self.limit));
        params.push(SqlParam::BigInt(self.offset()));

        Statement {
            sql: join_sql(&[SELECT_DOCTORS, &self.where_clause(), self.sort.order_by(), &pagination]),
            params,
        }
    }
}

fn join_sql(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(
    field: &'static str,
    value: &Option<String>,
) -> Result<Option<T>, DoctorError> {
    match present(value) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| DoctorError::InvalidParameter {
            field,
            value: raw.to_string(),
        }),
    }
}
