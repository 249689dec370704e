//! Search parameters driving a listing query.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::resource::ListingResource;
use crate::domain::types::{PageNumber, PageSize, TypeConstraintError};

/// Query-string key holding the current page.
pub const PAGE_KEY: &str = "page";
/// Query-string key holding the page size.
pub const RESULTS_PER_PAGE_KEY: &str = "resultsPerPage";

/// Errors raised when mutating search parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Key is not a filter of the listing resource.
    #[error("unknown search parameter: {0}")]
    UnknownParameter(String),
    /// Pagination value violated its invariant.
    #[error("invalid pagination: {0}")]
    InvalidPagination(#[from] TypeConstraintError),
}

/// Filter, sort and pagination values for one listing page.
///
/// Filter values are stored trimmed; an empty value is the same as an absent
/// one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    resource: &'static ListingResource,
    pub page: PageNumber,
    pub results_per_page: PageSize,
    filters: BTreeMap<&'static str, String>,
}

impl SearchParams {
    /// Default parameters: first page, default page size, no filters.
    pub fn new(resource: &'static ListingResource) -> Self {
        Self {
            resource,
            page: PageNumber::default(),
            results_per_page: PageSize::default(),
            filters: BTreeMap::new(),
        }
    }

    pub fn resource(&self) -> &'static ListingResource {
        self.resource
    }

    /// Current value of a filter, if set.
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    /// Sets or clears a single filter.
    pub fn set_filter(&mut self, key: &str, value: Option<&str>) -> Result<(), SearchError> {
        let key = self
            .resource
            .filter_key(key)
            .ok_or_else(|| SearchError::UnknownParameter(key.to_string()))?;

        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => {
                self.filters.insert(key, value.to_string());
            }
            None => {
                self.filters.remove(key);
            }
        }
        Ok(())
    }

    /// Applies every entry of `update`, or none of them if any key is
    /// unknown.
    pub fn apply(&mut self, update: &FilterUpdate) -> Result<(), SearchError> {
        if let Some((key, _)) = update
            .entries()
            .find(|(key, _)| self.resource.filter_key(key).is_none())
        {
            return Err(SearchError::UnknownParameter(key.to_string()));
        }
        for (key, value) in update.entries() {
            self.set_filter(key, value)?;
        }
        Ok(())
    }

    /// Set filters in the resource's declaration order.
    pub fn filters(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.resource
            .filter_keys
            .iter()
            .filter_map(|key| self.filters.get(key).map(|v| (*key, v.as_str())))
    }

    /// Every non-empty entry in stable query-string order: pagination
    /// first, then filters.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            (PAGE_KEY, self.page.to_string()),
            (RESULTS_PER_PAGE_KEY, self.results_per_page.to_string()),
        ];
        entries.extend(self.filters().map(|(k, v)| (k, v.to_string())));
        entries
    }
}

/// Partial set of filter values submitted by a filter form.
///
/// A `None` value clears the filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    entries: Vec<(String, Option<String>)>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), Some(value.into())));
        self
    }

    pub fn clear(mut self, key: impl Into<String>) -> Self {
        self.entries.push((key.into(), None));
        self
    }

    /// Sets the filter when `value` is present and clears it otherwise.
    pub fn set_or_clear(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self.clear(key),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::{MESSAGES, PROPERTIES};

    #[test]
    fn set_filter_trims_and_clears_empty_values() {
        let mut params = SearchParams::new(&PROPERTIES);
        params.set_filter("town", Some("  York ")).unwrap();
        assert_eq!(params.filter("town"), Some("York"));

        params.set_filter("town", Some("   ")).unwrap();
        assert_eq!(params.filter("town"), None);
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut params = SearchParams::new(&MESSAGES);
        let update = FilterUpdate::new()
            .set("status", "read")
            .set("town", "York");

        let result = params.apply(&update);

        assert_eq!(result, Err(SearchError::UnknownParameter("town".into())));
        assert_eq!(params.filter("status"), None);
    }

    #[test]
    fn pagination_keys_are_not_filters() {
        let mut params = SearchParams::new(&PROPERTIES);
        assert!(params.set_filter(PAGE_KEY, Some("3")).is_err());
        assert!(params.set_filter(RESULTS_PER_PAGE_KEY, Some("20")).is_err());
    }

    #[test]
    fn entries_follow_declaration_order() {
        let mut params = SearchParams::new(&PROPERTIES);
        params.set_filter("postcode", Some("YO1")).unwrap();
        params.set_filter("sort", Some("price")).unwrap();
        params.set_filter("town", Some("York")).unwrap();

        let keys: Vec<_> = params.entries().into_iter().map(|(k, _)| k).collect();

        assert_eq!(
            keys,
            vec!["page", "resultsPerPage", "sort", "town", "postcode"]
        );
    }
}
