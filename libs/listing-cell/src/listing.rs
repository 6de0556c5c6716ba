//! Listing state machine.
//!
//! All transitions go through [`ListingState::reduce`], which returns the
//! next state and, when data must be (re)loaded, the [`FetchRequest`] to
//! perform. Each request carries a sequence number; a response is only
//! applied when it answers the most recent request, so a slow earlier fetch
//! can never overwrite the result of a later one.

use crate::filters::{FilterChange, FilterState};
use crate::models::{Doctor, DoctorPage};
use crate::pagination::{page_window, PageWindow};

/// Doctors requested per page by the listing.
pub const PAGE_SIZE: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub sequence: u64,
    pub page: i64,
    pub filters: FilterState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingEvent {
    /// A filter control changed; resets to page 1.
    FilterChanged(FilterChange),
    PageRequested(i64),
    FetchSucceeded { sequence: u64, page: DoctorPage },
    FetchFailed { sequence: u64, message: String },
}

/// What the doctor list area should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Doctors(&'a [Doctor]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub filters: FilterState,
    pub doctors: Vec<Doctor>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_doctors: i64,
    pub loading: bool,
    pub error: Option<String>,
    latest_request: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(DoctorPage {
            current_page: 1,
            ..DoctorPage::default()
        })
    }
}

impl ListingState {
    /// Start from server-provided data with the default filters.
    pub fn new(initial: DoctorPage) -> Self {
        Self {
            filters: FilterState::default(),
            doctors: initial.doctors,
            current_page: initial.current_page,
            total_pages: initial.total_pages,
            total_doctors: initial.total_doctors,
            loading: false,
            error: None,
            latest_request: 0,
        }
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn reduce(mut self, event: ListingEvent) -> (Self, Option<FetchRequest>) {
        match event {
            ListingEvent::FilterChanged(change) => {
                let filters = self.filters.apply(change);
                if filters == self.filters {
                    return (self, None);
                }
                self.filters = filters;
                let request = self.begin_fetch(1);
                (self, Some(request))
            }
            ListingEvent::PageRequested(page) => {
                let request = self.begin_fetch(page);
                (self, Some(request))
            }
            ListingEvent::FetchSucceeded { sequence, page } => {
                if sequence == self.latest_request {
                    self.doctors = page.doctors;
                    self.current_page = page.current_page;
                    self.total_pages = page.total_pages;
                    self.total_doctors = page.total_doctors;
                    self.loading = false;
                }
                (self, None)
            }
            ListingEvent::FetchFailed { sequence, message } => {
                if sequence == self.latest_request {
                    self.error = Some(message);
                    self.doctors.clear();
                    self.loading = false;
                }
                (self, None)
            }
        }
    }

    fn begin_fetch(&mut self, page: i64) -> FetchRequest {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        FetchRequest {
            sequence: self.latest_request,
            page,
            filters: self.filters.clone(),
        }
    }

    pub fn view(&self) -> ListingView<'_> {
        if self.loading {
            ListingView::Loading
        } else if let Some(message) = &self.error {
            ListingView::Error(message)
        } else if self.doctors.is_empty() {
            ListingView::Empty
        } else {
            ListingView::Doctors(&self.doctors)
        }
    }

    /// Pagination is only shown under a successfully loaded, non-empty list.
    pub fn pagination(&self) -> Option<PageWindow> {
        match self.view() {
            ListingView::Doctors(_) => page_window(self.current_page, self.total_pages),
            _ => None,
        }
    }
}
