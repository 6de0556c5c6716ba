//! Template context for the listing page.

use minijinja::{context, Value};
use reqwest::Url;
use serde::Serialize;

use listing_cell::filters::{
    AVAILABILITY_OPTIONS, CONSULTATION_TYPE_OPTIONS, EXPERIENCE_RANGES, FEE_RANGES, GENDER_OPTIONS,
    SORT_OPTIONS,
};
use listing_cell::{FilterState, ListingState, ListingView, PageWindow, LISTING_SPECIALIZATION};

use crate::routes::LISTING_PATH;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: i64,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
    pub first: Option<PageLink>,
    pub leading_ellipsis: bool,
    pub pages: Vec<PageLink>,
    pub trailing_ellipsis: bool,
    pub last: Option<PageLink>,
}

impl PaginationView {
    pub fn new(window: &PageWindow, filters: &FilterState) -> Self {
        let link = |number: i64| PageLink {
            number,
            href: page_href(filters, number),
            active: number == window.current,
        };

        Self {
            previous_href: window.has_previous.then(|| page_href(filters, window.current - 1)),
            next_href: window.has_next.then(|| page_href(filters, window.current + 1)),
            first: window.show_first.then(|| link(1)),
            leading_ellipsis: window.leading_ellipsis,
            pages: window.pages.iter().map(|&n| link(n)).collect(),
            trailing_ellipsis: window.trailing_ellipsis,
            last: window.show_last.then(|| link(window.total)),
        }
    }
}

/// Link to `page` of the listing with the current filters kept.
pub fn page_href(filters: &FilterState, page: i64) -> String {
    let mut pairs = filters.filter_pairs();
    pairs.push(("page", page.to_string()));

    Url::parse_with_params("http://localhost/", &pairs)
        .ok()
        .and_then(|url| url.query().map(|q| format!("{}?{}", LISTING_PATH, q)))
        .unwrap_or_else(|| LISTING_PATH.to_string())
}

/// Language choices: the loaded ones plus the current selection.
pub fn language_options(mut languages: Vec<String>, selected: &str) -> Vec<String> {
    if !selected.is_empty() && !languages.iter().any(|l| l == selected) {
        languages.push(selected.to_string());
        languages.sort();
    }
    languages
}

pub fn listing_context(state: &ListingState, languages: Vec<String>) -> Value {
    let (view, error, doctors) = match state.view() {
        ListingView::Loading => ("loading", None, &[][..]),
        ListingView::Error(message) => ("error", Some(message), &[][..]),
        ListingView::Empty => ("empty", None, &[][..]),
        ListingView::Doctors(doctors) => ("doctors", None, doctors),
    };

    context! {
        title => format!("{} Doctors - Book Appointment", LISTING_SPECIALIZATION),
        heading => format!("{} Doctors", LISTING_SPECIALIZATION),
        listing_path => LISTING_PATH,
        filters => &state.filters,
        experience_range => state.filters.experience_range(),
        fee_range => state.filters.fee_range(),
        sort_options => SORT_OPTIONS,
        gender_options => GENDER_OPTIONS,
        availability_options => AVAILABILITY_OPTIONS,
        consultation_type_options => CONSULTATION_TYPE_OPTIONS,
        experience_ranges => EXPERIENCE_RANGES,
        fee_ranges => FEE_RANGES,
        languages => language_options(languages, &state.filters.language),
        total_doctors => state.total_doctors,
        view => view,
        error => error,
        doctors => doctors,
        pagination => state.pagination().map(|w| PaginationView::new(&w, &state.filters)),
    }
}
