//! Descriptions of the listing endpoints driven by the search controller.

/// Static description of one listing page and the endpoint behind it.
#[derive(Debug, PartialEq, Eq)]
pub struct ListingResource {
    /// Path segment of both the browser route and the REST endpoint.
    pub path: &'static str,
    /// Name of the JSON array holding the records in a response body.
    pub items_field: &'static str,
    /// Name of the JSON number holding the total match count.
    pub count_field: &'static str,
    /// Filter keys accepted by the endpoint, in query-string order.
    pub filter_keys: &'static [&'static str],
    /// Plural noun used in the pagination summary.
    pub noun: &'static str,
}

impl ListingResource {
    /// Returns the canonical spelling of `key` if it is one of this
    /// resource's filter keys.
    pub fn filter_key(&self, key: &str) -> Option<&'static str> {
        self.filter_keys.iter().copied().find(|k| *k == key)
    }

    /// Browser route for this listing page, e.g. `/properties`.
    pub fn route(&self) -> String {
        format!("/{}", self.path)
    }
}

/// Property listings.
pub static PROPERTIES: ListingResource = ListingResource {
    path: "properties",
    items_field: "properties",
    count_field: "propertyCount",
    filter_keys: &[
        "sort",
        "sortDirection",
        "search",
        "ownerId",
        "type",
        "status",
        "priority",
        "priceLow",
        "priceHigh",
        "town",
        "county",
        "postcode",
    ],
    noun: "properties",
};

/// Messages received by the signed-in user.
pub static MESSAGES: ListingResource = ListingResource {
    path: "messages",
    items_field: "messages",
    count_field: "messageCount",
    filter_keys: &[
        "sort",
        "sortDirection",
        "receiverUserId",
        "propertyId",
        "status",
    ],
    noun: "messages",
};

/// Looks a resource up by its path segment.
pub fn by_path(path: &str) -> Option<&'static ListingResource> {
    match path.trim_matches('/') {
        "properties" => Some(&PROPERTIES),
        "messages" => Some(&MESSAGES),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_key_matches_exact_names_only() {
        assert_eq!(PROPERTIES.filter_key("town"), Some("town"));
        assert_eq!(PROPERTIES.filter_key("Town"), None);
        assert_eq!(PROPERTIES.filter_key("page"), None);
        assert_eq!(MESSAGES.filter_key("town"), None);
    }

    #[test]
    fn resources_resolve_by_path() {
        assert_eq!(by_path("/messages"), Some(&MESSAGES));
        assert_eq!(by_path("properties"), Some(&PROPERTIES));
        assert_eq!(by_path("users"), None);
    }
}
