use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, warn, Level};

mod router;

use doctor_cell::{DoctorRepository, DoctorService, MemoryDoctorRepository, PgDoctorRepository};
use shared_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    shared_utils::init_tracing();

    info!("Starting doctor listing API server");

    let config = AppConfig::from_env();

    let repository: Arc<dyn DoctorRepository> = if config.is_database_configured() {
        let pool = shared_database::connect(&config).await?;
        shared_database::run_migrations(&pool).await?;
        Arc::new(PgDoctorRepository::new(pool))
    } else {
        warn!("DATABASE_URL not set, serving doctors from an in-memory store; data is lost on restart");
        Arc::new(MemoryDoctorRepository::new())
    };

    let service = Arc::new(DoctorService::new(repository, config.default_page_size));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router::create_router(service)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Backend server is running on http://localhost:{}", config.port);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
