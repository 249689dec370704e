//! Wire shape of a listing endpoint response.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::resource::ListingResource;
use crate::fetcher::{FetchError, FetchResult};

/// One page of records as resolved by the server.
///
/// `page` and `results_per_page` are what the server actually served, which
/// may differ from what was requested when it clamps out-of-range values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingPage {
    /// Records in server order, opaque to the search core.
    pub items: Vec<Value>,
    /// Total number of records matching the filters.
    pub total_count: usize,
    pub page: u32,
    pub results_per_page: u32,
}

impl ListingPage {
    /// Reads a response body of the form
    /// `{ <items field>: [...], page, resultsPerPage, <count field> }`.
    pub fn from_body(resource: &ListingResource, body: Value) -> FetchResult<Self> {
        let Value::Object(mut body) = body else {
            return Err(FetchError::Decode("response body is not an object".into()));
        };

        let items = match body.remove(resource.items_field) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(FetchError::Decode(format!(
                    "`{}` is not an array",
                    resource.items_field
                )));
            }
            None => {
                return Err(FetchError::Decode(format!(
                    "missing `{}`",
                    resource.items_field
                )));
            }
        };

        let total_count = read_number(&body, resource.count_field)?;
        let page = read_number(&body, "page")?;
        let results_per_page = read_number(&body, "resultsPerPage")?;

        Ok(Self {
            items,
            total_count: usize::try_from(total_count)
                .map_err(|_| FetchError::Decode(format!("`{}` overflows", resource.count_field)))?,
            page: u32::try_from(page).map_err(|_| FetchError::Decode("`page` overflows".into()))?,
            results_per_page: u32::try_from(results_per_page)
                .map_err(|_| FetchError::Decode("`resultsPerPage` overflows".into()))?,
        })
    }
}

pub(crate) fn decode_items<T: DeserializeOwned>(items: &[Value]) -> Result<Vec<T>, serde_json::Error> {
    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()))
        .collect()
}

/// Accepts both JSON numbers and numeric strings; query-string echoes from
/// the API sometimes come back as strings.
fn read_number(body: &serde_json::Map<String, Value>, field: &str) -> FetchResult<u64> {
    match body.get(field) {
        Some(Value::Number(n)) => n
            .as_u64()
            .ok_or_else(|| FetchError::Decode(format!("`{field}` is not a non-negative integer"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| FetchError::Decode(format!("`{field}` is not a number"))),
        Some(_) => Err(FetchError::Decode(format!("`{field}` is not a number"))),
        None => Err(FetchError::Decode(format!("missing `{field}`"))),
    }
}
