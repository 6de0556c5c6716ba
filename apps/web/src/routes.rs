use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::get,
    Router,
};
use minijinja::Environment;
use serde::Deserialize;
use tracing::{debug, error};

use listing_cell::{
    fallback_languages, unique_languages, DoctorApiClient, FilterChange, FilterState,
    ListingController, ListingState,
};
use shared_models::AppError;

use crate::view::listing_context;

pub const LISTING_PATH: &str = "/specialties/general-physician-internal-medicine";

const LISTING_TEMPLATE: &str = "listing.html";

pub struct WebState {
    client: DoctorApiClient,
    templates: Environment<'static>,
}

impl WebState {
    pub fn new(client: DoctorApiClient) -> anyhow::Result<Arc<Self>> {
        let mut templates = Environment::new();
        templates.add_template(LISTING_TEMPLATE, include_str!("../templates/listing.html"))?;

        Ok(Arc::new(Self { client, templates }))
    }
}

/// Query string of the listing page. Filter fields use the API's names;
/// the form's range dropdowns submit presets that override both bounds.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingParams {
    #[serde(flatten)]
    pub filters: FilterState,
    pub page: Option<String>,
    pub experience_range: Option<String>,
    pub fee_range: Option<String>,
}

impl ListingParams {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    pub fn into_filters(self) -> FilterState {
        let mut filters = self.filters;
        if let Some(preset) = self.experience_range {
            filters = filters.apply(FilterChange::ExperienceRange(preset));
        }
        if let Some(preset) = self.fee_range {
            filters = filters.apply(FilterChange::FeeRange(preset));
        }
        filters
    }
}

pub fn create_router(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(LISTING_PATH) }))
        .route(LISTING_PATH, get(listing_page))
        .with_state(state)
}

#[axum::debug_handler]
async fn listing_page(
    State(state): State<Arc<WebState>>,
    Query(params): Query<ListingParams>,
) -> Result<Html<String>, AppError> {
    let page = params.page();
    let filters = params.into_filters();
    debug!("Rendering listing page {} with {:?}", page, filters);

    let controller = ListingController::with_state(
        state.client.clone(),
        ListingState::default().with_filters(filters),
    );
    let listing = controller.go_to_page(page).await;

    let languages = match unique_languages(&listing.doctors) {
        loaded if loaded.is_empty() => fallback_languages(),
        loaded => loaded,
    };

    state
        .templates
        .get_template(LISTING_TEMPLATE)
        .and_then(|template| template.render(listing_context(&listing, languages)))
        .map(Html)
        .map_err(|e| {
            error!("Failed to render listing page: {}", e);
            AppError::Internal(e.to_string())
        })
}
