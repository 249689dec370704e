//! Query-string codec for [`SearchParams`].
//!
//! Decoding never fails: malformed pairs, unknown keys and out-of-range
//! pagination values are dropped and the defaults take their place.
//! Encoding emits only non-empty entries, in the order given by
//! [`SearchParams::entries`], so equal parameters always produce the same
//! string.

use std::collections::HashSet;

use crate::domain::resource::ListingResource;
use crate::domain::search::{PAGE_KEY, RESULTS_PER_PAGE_KEY, SearchParams};
use crate::domain::types::{PageNumber, PageSize};

/// Parses a query string (with or without the leading `?`).
pub fn decode(resource: &'static ListingResource, query: &str) -> SearchParams {
    let mut params = SearchParams::new(resource);
    let query = query.trim().trim_start_matches('?');
    if query.is_empty() {
        return params;
    }

    let pairs = match serde_html_form::from_str::<Vec<(String, String)>>(query) {
        Ok(pairs) => pairs,
        Err(err) => {
            log::warn!("Ignoring malformed query string {query:?}: {err}");
            return params;
        }
    };

    // Like the browser's URLSearchParams::get, the first occurrence wins.
    let mut seen = HashSet::new();
    for (key, value) in pairs {
        if !seen.insert(key.clone()) {
            continue;
        }
        match key.as_str() {
            PAGE_KEY => match value.parse::<PageNumber>() {
                Ok(page) => params.page = page,
                Err(err) => log::debug!("Ignoring page {value:?}: {err}"),
            },
            RESULTS_PER_PAGE_KEY => match value.parse::<PageSize>() {
                Ok(size) => params.results_per_page = size,
                Err(err) => log::debug!("Ignoring resultsPerPage {value:?}: {err}"),
            },
            _ => {
                if params.set_filter(&key, Some(value.as_str())).is_err() {
                    log::debug!("Ignoring unknown query parameter {key:?}");
                }
            }
        }
    }

    params
}

/// Serializes the non-empty entries of `params` without a leading `?`.
pub fn encode(params: &SearchParams) -> String {
    let entries = params.entries();
    serde_html_form::to_string(&entries).unwrap_or_else(|err| {
        log::error!("Failed to encode search parameters: {err}");
        String::new()
    })
}
