//! `reqwest`-backed implementation of [`ListingFetcher`].

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::domain::resource::ListingResource;
use crate::fetcher::{ACCESS_TOKEN_HEADER, FetchError, FetchResult, ListingFetcher, ListingPage};
use crate::models::config::ClientConfig;

/// Fetches listings with `GET {api_url}/{resource}?{query}`.
#[derive(Clone, Debug)]
pub struct HttpListingFetcher {
    client: Client,
    api_url: String,
}

impl HttpListingFetcher {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> FetchResult<Self> {
        Self::new(
            config.api_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Full request URL for a resource and encoded query.
    pub fn url(&self, resource: &ListingResource, query: &str) -> String {
        if query.is_empty() {
            format!("{}/{}", self.api_url, resource.path)
        } else {
            format!("{}/{}?{}", self.api_url, resource.path, query)
        }
    }
}

impl ListingFetcher for HttpListingFetcher {
    fn fetch(
        &self,
        resource: &'static ListingResource,
        query: &str,
        access_token: Option<&str>,
    ) -> FetchResult<ListingPage> {
        let url = self.url(resource, query);
        log::debug!("GET {url}");

        let mut request = self.client.get(&url);
        if let Some(token) = access_token {
            request = request.header(ACCESS_TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("GET {url} answered {status}");
            return Err(FetchError::Request {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        ListingPage::from_body(resource, body)
    }
}
