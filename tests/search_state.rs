use std::cell::RefCell;
use std::collections::HashMap;

use estate_listings::codec;
use estate_listings::controller::{Completion, SearchState, SearchStateController};
use estate_listings::credentials::StaticCredentials;
use estate_listings::domain::resource::{ListingResource, MESSAGES, PROPERTIES};
use estate_listings::domain::search::FilterUpdate;
use estate_listings::fetcher::{FetchError, FetchResult, ListingFetcher, ListingPage};
use estate_listings::forms::property::PropertyFilterForm;
use estate_listings::history::{Location, MemoryHistory};
use serde_json::json;

/// Serves canned pages keyed by encoded query and records every request.
#[derive(Default)]
struct CannedFetcher {
    pages: HashMap<String, FetchResult<ListingPage>>,
    requests: RefCell<Vec<(String, Option<String>)>>,
}

impl CannedFetcher {
    fn with(mut self, query: &str, result: FetchResult<ListingPage>) -> Self {
        self.pages.insert(query.to_string(), result);
        self
    }
}

impl ListingFetcher for CannedFetcher {
    fn fetch(
        &self,
        _resource: &'static ListingResource,
        query: &str,
        access_token: Option<&str>,
    ) -> FetchResult<ListingPage> {
        self.requests
            .borrow_mut()
            .push((query.to_string(), access_token.map(str::to_string)));
        self.pages
            .get(query)
            .cloned()
            .unwrap_or(Err(FetchError::Request { status: 404 }))
    }
}

fn listing(titles: &[&str], page: u32, size: u32, total: usize) -> ListingPage {
    ListingPage {
        items: titles.iter().map(|t| json!({ "title": t })).collect(),
        total_count: total,
        page,
        results_per_page: size,
    }
}

fn open(
    resource: &'static ListingResource,
    query: &str,
    credentials: StaticCredentials,
) -> SearchStateController<MemoryHistory, StaticCredentials> {
    let history = MemoryHistory::starting_at(Location::new(resource.route(), query));
    SearchStateController::new(resource, query, history, credentials)
}

#[test]
fn initial_url_drives_first_request() {
    let fetcher = CannedFetcher::default().with(
        "page=2&resultsPerPage=20&status=listed",
        Ok(listing(&["Barn conversion"], 2, 20, 21)),
    );
    let mut controller = open(
        &PROPERTIES,
        "page=2&resultsPerPage=20&status=listed",
        StaticCredentials::anonymous(),
    );

    let ticket = controller.start();
    controller.run(&ticket, &fetcher);

    assert_eq!(controller.state(), SearchState::Idle);
    assert_eq!(controller.total_count(), 21);
    assert_eq!(controller.items()[0]["title"], "Barn conversion");
    assert_eq!(
        fetcher.requests.borrow().as_slice(),
        &[("page=2&resultsPerPage=20&status=listed".to_string(), None)]
    );
    assert_eq!(controller.history().len(), 1);
}

#[test]
fn messages_send_access_token() {
    let fetcher = CannedFetcher::default().with(
        "page=1&resultsPerPage=10",
        Ok(listing(&[], 1, 10, 0)),
    );
    let mut controller = open(&MESSAGES, "", StaticCredentials::signed_in("token-1"));

    let ticket = controller.start();
    controller.run(&ticket, &fetcher);

    assert_eq!(
        fetcher.requests.borrow()[0].1.as_deref(),
        Some("token-1")
    );
    assert_eq!(controller.pagination().summary, "Found 0 messages");
}

#[test]
fn filter_form_submission_restarts_paging() {
    let fetcher = CannedFetcher::default()
        .with("page=3&resultsPerPage=10", Ok(listing(&["a"], 3, 10, 50)))
        .with(
            "page=1&resultsPerPage=10&ownerId=u42&status=listed&town=Bath",
            Ok(listing(&["b", "c"], 1, 10, 2)),
        );
    let mut controller = open(&PROPERTIES, "page=3", StaticCredentials::anonymous());
    let ticket = controller.start();
    controller.run(&ticket, &fetcher);

    let form: PropertyFilterForm =
        serde_html_form::from_str("town=Bath&excludeUnderOffer=on&onlyMine=on").unwrap();
    let ticket = controller
        .set_filters(&form.into_update(Some("u42")).unwrap())
        .unwrap();
    controller.run(&ticket, &fetcher);

    assert_eq!(controller.params().page.get(), 1);
    assert_eq!(controller.total_count(), 2);
    assert_eq!(
        controller.history().current().map(|l| l.to_string()),
        Some("/properties?page=1&resultsPerPage=10&ownerId=u42&status=listed&town=Bath".into())
    );
}

#[test]
fn server_error_hides_previous_results() {
    let fetcher = CannedFetcher::default()
        .with("page=1&resultsPerPage=10", Ok(listing(&["a", "b"], 1, 10, 2)))
        .with(
            "page=1&resultsPerPage=10&priceLow=abc",
            Err(FetchError::Request { status: 500 }),
        );
    let mut controller = open(&PROPERTIES, "", StaticCredentials::anonymous());
    let ticket = controller.start();
    controller.run(&ticket, &fetcher);
    assert_eq!(controller.items().len(), 2);

    let ticket = controller
        .set_filters(&FilterUpdate::new().set("priceLow", "abc"))
        .unwrap();
    controller.run(&ticket, &fetcher);

    assert_eq!(controller.state(), SearchState::Error);
    assert!(controller.items().is_empty());
    assert_eq!(controller.total_count(), 0);
    assert_eq!(
        controller.alert().map(|a| a.message.as_str()),
        Some("Invalid filters. Please check your filters and try again.")
    );
}

#[test]
fn out_of_order_responses_keep_latest_search() {
    let mut controller = open(&PROPERTIES, "", StaticCredentials::anonymous());
    controller.start();

    let york = controller
        .set_filters(&FilterUpdate::new().set("town", "York"))
        .unwrap();
    let bath = controller
        .set_filters(&FilterUpdate::new().set("town", "Bath"))
        .unwrap();

    // The York response arrives last.
    let fetcher = CannedFetcher::default()
        .with(&york.query, Ok(listing(&["york"], 1, 10, 1)))
        .with(&bath.query, Ok(listing(&["bath"], 1, 10, 1)));
    assert_eq!(controller.run(&bath, &fetcher), Completion::Applied);
    assert_eq!(controller.run(&york, &fetcher), Completion::Discarded);

    assert_eq!(controller.items()[0]["title"], "bath");
    assert_eq!(controller.params().filter("town"), Some("Bath"));
}

#[test]
fn decode_restores_non_empty_entries() {
    let queries = [
        "page=1&resultsPerPage=10",
        "page=5&resultsPerPage=3&sort=price&sortDirection=desc&priceHigh=500000",
        "page=2&resultsPerPage=100&search=sea+view&county=Cornwall&postcode=TR1",
    ];

    for query in queries {
        let params = codec::decode(&PROPERTIES, query);
        assert_eq!(codec::decode(&PROPERTIES, &codec::encode(&params)), params);
        assert_eq!(codec::encode(&params), query);
    }
}
