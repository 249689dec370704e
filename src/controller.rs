//! Search state shared by the listing pages.
//!
//! A [`SearchStateController`] owns the [`SearchParams`] of one page view and
//! keeps them in sync with the address bar and the listing endpoint. Every
//! mutation writes the encoded state to [`History`] and hands back a
//! [`FetchTicket`]; the host performs the request (see
//! [`SearchStateController::run`]) and reports the outcome through
//! [`SearchStateController::complete`]. Only the most recently issued ticket
//! is ever applied, so a slow response to an older search cannot overwrite a
//! newer one.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec;
use crate::credentials::CredentialProvider;
use crate::domain::resource::ListingResource;
use crate::domain::search::{FilterUpdate, SearchError, SearchParams};
use crate::domain::types::{PageNumber, PageSize};
use crate::dto::listing::decode_items;
use crate::fetcher::{FetchResult, ListingFetcher, ListingPage};
use crate::history::{History, Location};
use crate::pagination::PaginationView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Loading,
    Error,
}

/// User-facing notice rendered above the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

/// One listing request issued by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub id: u64,
    pub resource: &'static ListingResource,
    /// Encoded search parameters.
    pub query: String,
    pub access_token: Option<String>,
}

/// Outcome of reporting a fetch result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Result belonged to the latest request and is now shown.
    Applied,
    /// Result was stale or already reported and has been dropped.
    Discarded,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum UrlWrite {
    Push,
    Replace,
}

pub struct SearchStateController<H, C> {
    params: SearchParams,
    state: SearchState,
    items: Vec<Value>,
    total_count: usize,
    alert: Option<Alert>,
    last_issued: u64,
    in_flight: Option<u64>,
    written: Option<Location>,
    history: H,
    credentials: C,
}

impl<H, C> SearchStateController<H, C>
where
    H: History,
    C: CredentialProvider,
{
    /// Builds the controller from the query string of the current location.
    ///
    /// Nothing is fetched or written until [`Self::start`] is called.
    pub fn new(resource: &'static ListingResource, query: &str, history: H, credentials: C) -> Self {
        Self {
            params: codec::decode(resource, query),
            state: SearchState::Idle,
            items: Vec::new(),
            total_count: 0,
            alert: None,
            last_issued: 0,
            in_flight: None,
            written: None,
            history,
            credentials,
        }
    }

    /// Issues the first request of the page view.
    ///
    /// The normalized URL replaces the current history entry, so opening a
    /// page does not add a second entry for the same view.
    pub fn start(&mut self) -> FetchTicket {
        self.issue(UrlWrite::Replace)
    }

    /// Merges filter values and restarts from the first page.
    ///
    /// Unknown keys are rejected before anything changes.
    pub fn set_filters(&mut self, update: &FilterUpdate) -> Result<FetchTicket, SearchError> {
        let mut params = self.params.clone();
        params.apply(update)?;
        params.page = PageNumber::FIRST;
        self.params = params;

        Ok(self.issue(UrlWrite::Push))
    }

    /// Moves to another page or page size, keeping the filters.
    pub fn set_page(&mut self, page: u32, results_per_page: u32) -> Result<FetchTicket, SearchError> {
        let page = PageNumber::new(page)?;
        let results_per_page = PageSize::new(results_per_page)?;

        self.params.page = page;
        self.params.results_per_page = results_per_page;

        Ok(self.issue(UrlWrite::Push))
    }

    /// Reports the outcome of the request identified by `ticket_id`.
    pub fn complete(&mut self, ticket_id: u64, result: FetchResult<ListingPage>) -> Completion {
        if self.in_flight != Some(ticket_id) {
            log::debug!(
                "Discarding {} response #{ticket_id}, latest is #{}",
                self.params.resource().path,
                self.last_issued
            );
            return Completion::Discarded;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                self.adopt_pagination(&page);
                self.items = page.items;
                self.total_count = page.total_count;
                self.state = SearchState::Idle;

                // Keep a reload on the page the server actually served.
                let location = self.location();
                if self.written.as_ref() != Some(&location) {
                    self.history.replace(&location);
                    self.written = Some(location);
                }
            }
            Err(err) => {
                log::error!(
                    "Failed to fetch {} with {:?}: {err}",
                    self.params.resource().path,
                    codec::encode(&self.params)
                );
                self.items.clear();
                self.total_count = 0;
                self.alert = Some(Alert {
                    message: err.user_message().to_string(),
                });
                self.state = SearchState::Error;
            }
        }

        Completion::Applied
    }

    /// Performs the request for `ticket` with `fetcher` and applies it.
    pub fn run<F>(&mut self, ticket: &FetchTicket, fetcher: &F) -> Completion
    where
        F: ListingFetcher + ?Sized,
    {
        let result = fetcher.fetch(ticket.resource, &ticket.query, ticket.access_token.as_deref());
        self.complete(ticket.id, result)
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SearchState::Loading
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Records of the last applied page, in server order.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Records of the last applied page as typed values.
    pub fn items_as<T: DeserializeOwned>(&self) -> Result<Vec<T>, serde_json::Error> {
        decode_items(&self.items)
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Address-bar location for the current parameters.
    pub fn location(&self) -> Location {
        Location::new(self.params.resource().route(), codec::encode(&self.params))
    }

    pub fn pagination(&self) -> PaginationView {
        PaginationView::new(
            self.params.resource(),
            self.params.page.get() as usize,
            self.params.results_per_page.get() as usize,
            self.total_count,
        )
    }

    /// The server served an empty page although records match; shown as an
    /// empty listing, the page is not corrected.
    pub fn is_past_end(&self) -> bool {
        self.state == SearchState::Idle && self.items.is_empty() && self.total_count > 0
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    fn issue(&mut self, write: UrlWrite) -> FetchTicket {
        self.state = SearchState::Loading;
        self.alert = None;

        let location = self.location();
        let write = if self.written.as_ref() == Some(&location) {
            UrlWrite::Replace
        } else {
            write
        };
        match write {
            UrlWrite::Push => self.history.push(&location),
            UrlWrite::Replace => self.history.replace(&location),
        }

        self.last_issued += 1;
        self.in_flight = Some(self.last_issued);

        log::info!("Requesting {location} as #{}", self.last_issued);

        let ticket = FetchTicket {
            id: self.last_issued,
            resource: self.params.resource(),
            query: location.query.clone(),
            access_token: self.credentials.access_token(),
        };
        self.written = Some(location);
        ticket
    }

    /// The server is authoritative for page and size, but values breaking
    /// the pagination invariants keep what was requested.
    fn adopt_pagination(&mut self, page: &ListingPage) {
        match PageNumber::new(page.page) {
            Ok(number) => self.params.page = number,
            Err(err) => log::warn!("Keeping requested page, server sent {}: {err}", page.page),
        }
        match PageSize::new(page.results_per_page) {
            Ok(size) => self.params.results_per_page = size,
            Err(err) => log::warn!(
                "Keeping requested page size, server sent {}: {err}",
                page.results_per_page
            ),
        }
    }
}
