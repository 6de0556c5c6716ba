use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::error::ClientError;
use crate::filters::FilterState;
use crate::listing::{FetchRequest, PAGE_SIZE};
use crate::models::{DoctorPage, LISTING_SPECIALIZATION};

/// HTTP client for the doctor listing API.
#[derive(Debug, Clone)]
pub struct DoctorApiClient {
    client: Client,
    base_url: String,
    page_size: i64,
}

impl DoctorApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: PAGE_SIZE,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of doctors for `filters`.
    pub async fn fetch_doctors(&self, page: i64, filters: &FilterState) -> Result<DoctorPage, ClientError> {
        let url = format!("{}/doctors", self.base_url);
        let params = filters.to_query_pairs(page, self.page_size, LISTING_SPECIALIZATION);
        debug!("Fetching doctors from {} with {:?}", url, params);

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, body);

            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<DoctorPage>().await?)
    }

    /// Perform a fetch issued by the listing state machine.
    pub async fn execute(&self, request: &FetchRequest) -> Result<DoctorPage, ClientError> {
        self.fetch_doctors(request.page, &request.filters).await
    }
}
