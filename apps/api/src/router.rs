use std::sync::Arc;

use axum::{routing::get, Router};

use doctor_cell::{doctor_routes, DoctorService};

pub fn create_router(service: Arc<DoctorService>) -> Router {
    Router::new()
        .route("/", get(|| async { "Doctor listing backend is running!" }))
        .merge(doctor_routes(service))
}
