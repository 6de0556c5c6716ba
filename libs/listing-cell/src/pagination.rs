use serde::Serialize;

/// Page-number buttons shown at once.
pub const MAX_PAGES_TO_SHOW: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: i64,
    pub total: i64,
    pub pages: Vec<i64>,
    /// Render a shortcut to page 1 before the window.
    pub show_first: bool,
    pub leading_ellipsis: bool,
    /// Render a shortcut to the last page after the window.
    pub show_last: bool,
    pub trailing_ellipsis: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Compute the pagination controls for `current` of `total` pages.
///
/// Returns `None` when there is at most one page. Otherwise the window
/// holds up to [`MAX_PAGES_TO_SHOW`] pages centered on `current`, pinned to
/// the first or last pages near either edge.
pub fn page_window(current: i64, total: i64) -> Option<PageWindow> {
    if total <= 1 {
        return None;
    }

    let half = MAX_PAGES_TO_SHOW / 2;
    let (start, end) = if total <= MAX_PAGES_TO_SHOW {
        (1, total)
    } else if current <= (MAX_PAGES_TO_SHOW + 1) / 2 {
        (1, MAX_PAGES_TO_SHOW)
    } else if current + half >= total {
        (total - MAX_PAGES_TO_SHOW + 1, total)
    } else {
        (current - half, current + half)
    };

    Some(PageWindow {
        current,
        total,
        pages: (start..=end).collect(),
        show_first: start > 1,
        leading_ellipsis: start > 2,
        show_last: end < total,
        trailing_ellipsis: end < total - 1,
        has_previous: current != 1,
        has_next: current != total,
    })
}
