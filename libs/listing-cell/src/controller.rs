use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::client::DoctorApiClient;
use crate::filters::FilterChange;
use crate::listing::{FetchRequest, ListingEvent, ListingState};
use crate::models::DoctorPage;

/// Drives a [`ListingState`] against the API. Dispatches may overlap; the
/// state's sequence guard decides which response wins.
pub struct ListingController {
    client: DoctorApiClient,
    state: Mutex<ListingState>,
}

impl ListingController {
    pub fn new(client: DoctorApiClient, initial: DoctorPage) -> Self {
        Self {
            client,
            state: Mutex::new(ListingState::new(initial)),
        }
    }

    pub fn with_state(client: DoctorApiClient, state: ListingState) -> Self {
        Self {
            client,
            state: Mutex::new(state),
        }
    }

    pub async fn snapshot(&self) -> ListingState {
        self.state.lock().await.clone()
    }

    pub async fn change_filter(&self, change: FilterChange) -> ListingState {
        self.dispatch(ListingEvent::FilterChanged(change)).await
    }

    pub async fn go_to_page(&self, page: i64) -> ListingState {
        self.dispatch(ListingEvent::PageRequested(page)).await
    }

    /// Apply `event`, run any fetch it triggers, and return the state after
    /// the response has been reduced.
    pub async fn dispatch(&self, event: ListingEvent) -> ListingState {
        let request = self.transition(event).await;

        let Some(request) = request else {
            return self.snapshot().await;
        };

        debug!("Fetch #{} for page {}", request.sequence, request.page);
        let outcome = match self.client.execute(&request).await {
            Ok(page) => ListingEvent::FetchSucceeded {
                sequence: request.sequence,
                page,
            },
            Err(err) => {
                warn!("Failed to fetch doctors: {}", err);
                ListingEvent::FetchFailed {
                    sequence: request.sequence,
                    message: err.to_string(),
                }
            }
        };

        self.transition(outcome).await;
        self.snapshot().await
    }

    async fn transition(&self, event: ListingEvent) -> Option<FetchRequest> {
        let mut guard = self.state.lock().await;
        let (next, request) = guard.clone().reduce(event);
        *guard = next;
        request
    }
}
