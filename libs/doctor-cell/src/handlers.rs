use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use shared_models::error::AppError;

use crate::models::{
    CreateDoctorRequest, CreateDoctorResponse, DoctorError, DoctorListQuery, DoctorListResponse,
};
use crate::services::DoctorService;

impl DoctorError {
    /// Map onto the HTTP error taxonomy. `summary` is the message used for
    /// store failures, whose raw detail is echoed alongside it.
    pub fn into_app_error(self, summary: &str) -> AppError {
        match self {
            DoctorError::MissingRequiredFields => AppError::BadRequest(self.to_string()),
            DoctorError::InvalidParameter { .. } => AppError::ValidationError(self.to_string()),
            DoctorError::SlugConflict(_) => AppError::Conflict(self.to_string()),
            DoctorError::Store(detail) => AppError::database(summary, detail),
        }
    }
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(service): State<Arc<DoctorService>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<DoctorListResponse>, AppError> {
    let page = service
        .list_doctors(&query)
        .await
        .map_err(|e| e.into_app_error("Failed to fetch doctors"))?;

    Ok(Json(page))
}

#[axum::debug_handler]
pub async fn add_doctor(
    State(service): State<Arc<DoctorService>>,
    payload: Result<Json<CreateDoctorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateDoctorResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected doctor payload: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    })?;

    let doctor = service
        .create_doctor(request)
        .await
        .map_err(|e| e.into_app_error("Failed to add doctor"))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateDoctorResponse {
            message: "Doctor added successfully".to_string(),
            doctor,
        }),
    ))
}
