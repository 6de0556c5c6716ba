// libs/doctor-cell/tests/handlers_test.rs
// Handler-level tests: call the axum handlers directly with extracted inputs.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use doctor_cell::handlers::{add_doctor, list_doctors};
use doctor_cell::{CreateDoctorRequest, DoctorError, DoctorListQuery};
use shared_models::error::AppError;
use shared_utils::test_utils::TestDoctor;

use common::{sample_doctors, seeded_repository, service_over, MockRepository};

fn list_query(pairs: &[(&str, &str)]) -> Query<DoctorListQuery> {
    let map: serde_json::Map<String, serde_json::Value> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    Query(serde_json::from_value(serde_json::Value::Object(map)).unwrap())
}

#[tokio::test]
async fn test_list_filters_by_gender_and_fee_range() {
    let repository = seeded_repository(&sample_doctors()).await;
    let service = service_over(repository);

    let Json(page) = list_doctors(
        State(service),
        list_query(&[
            ("gender", "Female"),
            ("minFee", "300"),
            ("maxFee", "800"),
            ("sortBy", "fee_asc"),
            ("page", "1"),
            ("limit", "5"),
        ]),
    )
    .await
    .unwrap();

    let fees: Vec<i32> = page.doctors.iter().map(|d| d.consultation_fee).collect();
    assert_eq!(fees, vec![300, 450, 450, 600, 800]);
    assert!(page.doctors.iter().all(|d| d.gender == "Female"));

    // Equal fees fall back to rating, highest first.
    assert_eq!(page.doctors[1].name, "Sunita Rao");
    assert_eq!(page.doctors[2].name, "Neha Gupta");

    assert_eq!(page.total_doctors, 5);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.current_page, 1);
}

#[tokio::test]
async fn test_list_last_page_is_partial() {
    let service = service_over(seeded_repository(&sample_doctors()).await);

    let Json(page) = list_doctors(State(service), list_query(&[("page", "3"), ("limit", "5")]))
        .await
        .unwrap();

    assert_eq!(page.total_doctors, 12);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 3);
    assert_eq!(page.doctors.len(), 2);
}

#[tokio::test]
async fn test_list_defaults_to_rating_then_experience() {
    let service = service_over(seeded_repository(&sample_doctors()).await);

    let Json(page) = list_doctors(State(service), list_query(&[])).await.unwrap();

    let ratings: Vec<f64> = page.doctors.iter().map(|d| d.rating).collect();
    let mut sorted = ratings.clone();
    sorted.sort_by(|a, b| b.total_cmp(a));
    assert_eq!(ratings, sorted);
    assert_eq!(page.doctors.len(), 10);
    assert_eq!(page.total_pages, 2);
}

#[tokio::test]
async fn test_list_other_specialization_is_empty() {
    let service = service_over(seeded_repository(&sample_doctors()).await);

    let Json(page) = list_doctors(State(service), list_query(&[("specialization", "Cardiology")]))
        .await
        .unwrap();

    assert!(page.doctors.is_empty());
    assert_eq!(page.total_doctors, 0);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_list_selects_requested_specialization() {
    let mut doctors = sample_doctors();
    doctors.push(TestDoctor::new("Irfan Qureshi", "Male", 1200).specialization("Cardiology"));
    let service = service_over(seeded_repository(&doctors).await);

    let Json(page) = list_doctors(State(service), list_query(&[("specialization", "Cardiology")]))
        .await
        .unwrap();

    assert_eq!(page.total_doctors, 1);
    assert_eq!(page.doctors[0].name, "Irfan Qureshi");
    assert_eq!(page.doctors[0].specialization, "Cardiology");
}

#[tokio::test]
async fn test_list_rejects_non_numeric_bounds() {
    let service = service_over(seeded_repository(&sample_doctors()).await);

    let result = list_doctors(State(service), list_query(&[("maxExperience", "ten")])).await;

    assert_matches!(result, Err(AppError::ValidationError(msg)) if msg.contains("maxExperience"));
}

#[tokio::test]
async fn test_list_store_failure_is_500_with_detail() {
    let mut repository = MockRepository::new();
    repository
        .expect_fetch_page()
        .returning(|_| Err(DoctorError::Store("connection refused".to_string())));
    repository.expect_count().never();

    let result = list_doctors(State(service_over(Arc::new(repository))), list_query(&[])).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_matches!(err, AppError::Database { message, detail } => {
        assert_eq!(message, "Failed to fetch doctors");
        assert_eq!(detail, "connection refused");
    });
}

#[tokio::test]
async fn test_add_doctor_returns_created_row() {
    let repository = seeded_repository(&[]).await;
    let service = service_over(repository.clone());

    let payload: CreateDoctorRequest =
        serde_json::from_value(TestDoctor::new("Lakshmi Narayan", "Female", 700).to_create_payload()).unwrap();

    let (status, Json(body)) = add_doctor(State(service), Ok(Json(payload))).await.unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.message, "Doctor added successfully");
    assert_eq!(body.doctor.id, 1);
    assert!(body.doctor.profile_slug.starts_with("lakshmi-narayan-"));
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_add_doctor_without_name_inserts_nothing() {
    let repository = seeded_repository(&[]).await;
    let service = service_over(repository.clone());

    let mut payload = TestDoctor::default().to_create_payload();
    payload.as_object_mut().unwrap().remove("name");
    let request: CreateDoctorRequest = serde_json::from_value(payload).unwrap();

    let result = add_doctor(State(service), Ok(Json(request))).await;

    assert_matches!(result, Err(AppError::BadRequest(msg)) if msg.starts_with("Missing required fields"));
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_add_doctor_slug_conflict_is_409() {
    let mut repository = MockRepository::new();
    repository
        .expect_insert()
        .times(1)
        .returning(|doctor| Err(DoctorError::SlugConflict(doctor.profile_slug)));

    let request: CreateDoctorRequest =
        serde_json::from_value(TestDoctor::default().to_create_payload()).unwrap();

    let result = add_doctor(State(service_over(Arc::new(repository))), Ok(Json(request))).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), StatusCode::CONFLICT);
    assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn test_add_doctor_store_failure_is_500() {
    let mut repository = MockRepository::new();
    repository
        .expect_insert()
        .returning(|_| Err(DoctorError::Store("disk full".to_string())));

    let request: CreateDoctorRequest =
        serde_json::from_value(TestDoctor::default().to_create_payload()).unwrap();

    let result = add_doctor(State(service_over(Arc::new(repository))), Ok(Json(request))).await;

    assert_matches!(result, Err(AppError::Database { message, .. }) if message == "Failed to add doctor");
}
