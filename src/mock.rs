//! Mock collaborators for isolating the search controller in tests.

use mockall::mock;

use crate::credentials::CredentialProvider;
use crate::domain::resource::ListingResource;
use crate::fetcher::{FetchResult, ListingFetcher, ListingPage};
use crate::history::{History, Location};

mock! {
    pub Fetcher {}

    impl ListingFetcher for Fetcher {
        fn fetch<'a>(
            &self,
            resource: &'static ListingResource,
            query: &str,
            access_token: Option<&'a str>,
        ) -> FetchResult<ListingPage>;
    }
}

mock! {
    pub History {}

    impl History for History {
        fn push(&self, location: &Location);
        fn replace(&self, location: &Location);
    }
}

mock! {
    pub Credentials {}

    impl CredentialProvider for Credentials {
        fn access_token(&self) -> Option<String>;
    }
}
