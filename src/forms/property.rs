use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::search::{FilterUpdate, SearchParams};
use crate::forms::{FormError, SortDirection, deserialize_choice, deserialize_switch, non_blank};

/// Status a property keeps while it is open for offers.
pub const LISTED_STATUS: &str = "listed";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PropertySort {
    /// Listed time.
    CreatedAt,
    Price,
    Type,
}

impl PropertySort {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertySort::CreatedAt => "createdAt",
            PropertySort::Price => "price",
            PropertySort::Type => "type",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "createdAt" => Some(PropertySort::CreatedAt),
            "price" => Some(PropertySort::Price),
            "type" => Some(PropertySort::Type),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data of the property filter panel.
pub struct PropertyFilterForm {
    #[serde(default)]
    pub price_low: Option<u64>,
    #[serde(default)]
    pub price_high: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub sort: Option<PropertySort>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub sort_direction: Option<SortDirection>,
    #[serde(default)]
    #[validate(length(max = 10))]
    pub postcode: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub town: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub county: Option<String>,
    /// Text searched in title and description.
    #[serde(default)]
    #[validate(length(max = 200))]
    pub search: Option<String>,
    /// Hide properties that are under offer.
    #[serde(default, deserialize_with = "deserialize_switch")]
    pub exclude_under_offer: bool,
    /// Show only properties added by the signed-in user.
    #[serde(default, deserialize_with = "deserialize_switch")]
    pub only_mine: bool,
}

impl PropertyFilterForm {
    /// Prefills the form from the current search.
    pub fn from_params(params: &SearchParams) -> Self {
        Self {
            price_low: params.filter("priceLow").and_then(|v| v.parse().ok()),
            price_high: params.filter("priceHigh").and_then(|v| v.parse().ok()),
            sort: params.filter("sort").and_then(PropertySort::parse),
            sort_direction: params.filter("sortDirection").and_then(SortDirection::parse),
            postcode: params.filter("postcode").map(str::to_string),
            town: params.filter("town").map(str::to_string),
            county: params.filter("county").map(str::to_string),
            search: params.filter("search").map(str::to_string),
            exclude_under_offer: params.filter("status") == Some(LISTED_STATUS),
            only_mine: params.filter("ownerId").is_some(),
        }
    }

    /// Validates the form and converts it into filter values.
    ///
    /// Every field of the panel is written, so clearing an input clears the
    /// filter. `user_id` is the signed-in user, needed for `only_mine`.
    pub fn into_update(self, user_id: Option<&str>) -> Result<FilterUpdate, FormError> {
        self.validate()?;

        if matches!((self.price_low, self.price_high), (Some(low), Some(high)) if low > high) {
            return Err(FormError::InvalidPriceRange);
        }

        let owner_id = if self.only_mine {
            Some(user_id.ok_or(FormError::SignInRequired)?.to_string())
        } else {
            None
        };

        Ok(FilterUpdate::new()
            .set_or_clear("priceLow", self.price_low.map(|p| p.to_string()))
            .set_or_clear("priceHigh", self.price_high.map(|p| p.to_string()))
            .set_or_clear("sort", self.sort.map(PropertySort::as_str))
            .set_or_clear("sortDirection", self.sort_direction.map(SortDirection::as_str))
            .set_or_clear("postcode", non_blank(self.postcode))
            .set_or_clear("town", non_blank(self.town))
            .set_or_clear("county", non_blank(self.county))
            .set_or_clear("search", non_blank(self.search))
            .set_or_clear("status", self.exclude_under_offer.then_some(LISTED_STATUS))
            .set_or_clear("ownerId", owner_id))
    }
}
