use serde::Serialize;

use crate::domain::resource::ListingResource;
use crate::domain::types::PageSize;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    // A page past the end still shows the window around the last page.
    let anchor = current_page.min(last_page);
    let mid_start = left_end.max(anchor.saturating_sub(left_current));
    let mid_end = (anchor + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// State of the pagination control shown above and below a listing.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PaginationView {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    /// Page links to render; `None` marks a gap.
    pub pages: Vec<Option<usize>>,
    pub page_size_options: Vec<u32>,
    /// e.g. `Found 45 properties`.
    pub summary: String,
}

impl PaginationView {
    pub fn new(resource: &ListingResource, current_page: usize, page_size: usize, total: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };
        let total_pages = if page_size == 0 { 0 } else { total.div_ceil(page_size) };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            page: current_page,
            page_size,
            total,
            total_pages,
            pages,
            page_size_options: PageSize::options().map(PageSize::get).collect(),
            summary: format!("Found {total} {}", resource.noun),
        }
    }

    /// Whether the current page lies past the last page that has records.
    pub fn is_past_end(&self) -> bool {
        self.total > 0 && self.page > self.total_pages
    }
}
