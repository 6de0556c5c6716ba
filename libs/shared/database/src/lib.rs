pub mod errors;
pub mod postgres;

pub use errors::{is_unique_violation, StoreErrorKind};
pub use postgres::{connect, run_migrations};

pub use sqlx::PgPool;
