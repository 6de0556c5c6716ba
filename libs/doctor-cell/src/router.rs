use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::services::DoctorService;

pub fn doctor_routes(service: Arc<DoctorService>) -> Router {
    Router::new()
        .route("/api/doctors", get(handlers::list_doctors))
        .route("/api/doctors/add", post(handlers::add_doctor))
        .with_state(service)
}
