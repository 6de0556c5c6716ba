pub mod routes;
pub mod view;

pub use routes::{create_router, WebState, LISTING_PATH};
