#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use doctor_cell::services::doctor::prepare_doctor;
use doctor_cell::{
    CreateDoctorRequest, Doctor, DoctorError, DoctorQuery, DoctorRepository, DoctorService,
    MemoryDoctorRepository, NewDoctor,
};
use shared_utils::test_utils::TestDoctor;

mock! {
    pub Repository {}

    #[async_trait]
    impl DoctorRepository for Repository {
        async fn count(&self, query: &DoctorQuery) -> Result<i64, DoctorError>;
        async fn fetch_page(&self, query: &DoctorQuery) -> Result<Vec<Doctor>, DoctorError>;
        async fn insert(&self, doctor: NewDoctor) -> Result<Doctor, DoctorError>;
    }
}

pub const PAGE_SIZE: i64 = 10;

/// A memory repository seeded with `doctors`, one slug suffix per doctor.
pub async fn seeded_repository(doctors: &[TestDoctor]) -> Arc<MemoryDoctorRepository> {
    let repository = Arc::new(MemoryDoctorRepository::new());
    for (i, doctor) in doctors.iter().enumerate() {
        let request: CreateDoctorRequest = serde_json::from_value(doctor.to_create_payload()).unwrap();
        let new_doctor = prepare_doctor(request, i as i64).unwrap();
        repository.insert(new_doctor).await.unwrap();
    }
    repository
}

pub fn service_over(repository: Arc<dyn DoctorRepository>) -> Arc<DoctorService> {
    Arc::new(DoctorService::new(repository, PAGE_SIZE))
}

/// Twelve doctors with a spread of genders, fees, experience and ratings.
pub fn sample_doctors() -> Vec<TestDoctor> {
    vec![
        TestDoctor::new("Asha Nair", "Female", 250).experience(4).rating(4.1),
        TestDoctor::new("Kavya Menon", "Female", 300).experience(9).rating(4.6),
        TestDoctor::new("Rohan Das", "Male", 350).experience(12).rating(4.8),
        TestDoctor::new("Neha Gupta", "Female", 450).experience(7).rating(4.2),
        TestDoctor::new("Sunita Rao", "Female", 450).experience(15).rating(4.9),
        TestDoctor::new("Vikram Shah", "Male", 500).experience(20).rating(4.4),
        TestDoctor::new("Pooja Iyer", "Female", 600).experience(6).rating(3.9),
        TestDoctor::new("Arjun Mehta", "Male", 700).experience(3).rating(4.0),
        TestDoctor::new("Divya Pillai", "Female", 800).experience(11).rating(4.7),
        TestDoctor::new("Meera Joshi", "Female", 850).experience(18).rating(4.3),
        TestDoctor::new("Karan Malhotra", "Male", 900).experience(25).rating(4.5),
        TestDoctor::new("Farah Khan", "Female", 1000).experience(14).rating(5.0),
    ]
}
