//! Fetching listing pages from the collaborator REST API.

use thiserror::Error;

use crate::domain::resource::ListingResource;
pub use crate::dto::listing::ListingPage;

#[cfg(feature = "client")]
pub mod http;

/// Header carrying the signed-in user's access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Alert shown when the server rejects a listing request.
pub const INVALID_FILTERS_MESSAGE: &str =
    "Invalid filters. Please check your filters and try again.";

/// Alert shown when the listing service could not be reached or answered
/// with something unreadable.
pub const UNAVAILABLE_MESSAGE: &str =
    "Listings are unavailable right now. Please try again later.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Server answered with a status other than 200.
    #[error("request failed with status {status}")]
    Request { status: u16 },

    /// Transport could not complete the request.
    #[error("network error: {0}")]
    Network(String),

    /// Status was 200 but the body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// Message suitable for an alert shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Request { .. } => INVALID_FILTERS_MESSAGE,
            FetchError::Network(_) | FetchError::Decode(_) => UNAVAILABLE_MESSAGE,
        }
    }
}

/// Retrieves one page of a listing for an already encoded query string.
///
/// Implementations do not retry; failures go straight back to the caller.
pub trait ListingFetcher {
    fn fetch(
        &self,
        resource: &'static ListingResource,
        query: &str,
        access_token: Option<&str>,
    ) -> FetchResult<ListingPage>;
}

impl<F: ListingFetcher + ?Sized> ListingFetcher for &F {
    fn fetch(
        &self,
        resource: &'static ListingResource,
        query: &str,
        access_token: Option<&str>,
    ) -> FetchResult<ListingPage> {
        (**self).fetch(resource, query, access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_blame_the_filters() {
        let err = FetchError::Request { status: 400 };
        assert_eq!(err.user_message(), INVALID_FILTERS_MESSAGE);
        assert_eq!(err.to_string(), "request failed with status 400");
    }

    #[test]
    fn transport_errors_are_generic() {
        assert_eq!(
            FetchError::Network("connection refused".into()).user_message(),
            UNAVAILABLE_MESSAGE
        );
        assert_eq!(
            FetchError::Decode("missing `page`".into()).user_message(),
            UNAVAILABLE_MESSAGE
        );
    }
}
