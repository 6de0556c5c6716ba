// =====================================================================================
// LISTING CELL - CLIENT-SIDE FILTER, PAGINATION AND FETCH STATE
// =====================================================================================

pub mod client;
pub mod controller;
pub mod error;
pub mod filters;
pub mod listing;
pub mod models;
pub mod pagination;

pub use client::DoctorApiClient;
pub use controller::ListingController;
pub use error::ClientError;
pub use filters::{FilterChange, FilterField, FilterState};
pub use listing::{FetchRequest, ListingEvent, ListingState, ListingView};
pub use models::*;
pub use pagination::{page_window, PageWindow};
