//! Filter forms rendered above the listing pages.
//!
//! Each form deserializes from a submitted form body, can be prefilled from
//! the current [`crate::domain::search::SearchParams`] and turns into a
//! [`crate::domain::search::FilterUpdate`] for the search controller.

use serde::de::value::StrDeserializer;
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

pub mod message;
pub mod property;

#[derive(Debug, Error)]
/// Errors that can occur when processing filter form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("minimum price is above maximum price")]
    InvalidPriceRange,

    #[error("sign in to filter by your own properties")]
    SignInRequired,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Reads a checkbox/switch value; browsers send `on` for a checked box and
/// omit unchecked ones.
pub(crate) fn deserialize_switch<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        value.as_deref().map(str::trim),
        Some("on" | "true" | "1")
    ))
}

/// Reads a select value; the blank option means no choice.
pub(crate) fn deserialize_choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(choice) => {
            let choice: StrDeserializer<'_, D::Error> = choice.into_deserializer();
            T::deserialize(choice).map(Some)
        }
    }
}

/// Trims a free-text field, mapping blank input to `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
