use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Listing priority; high-priority properties get a larger tile.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PropertyPriority {
    #[default]
    Normal,
    High,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyLocation {
    #[serde(default)]
    pub address_line: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Camel-cased property type, e.g. `semiDetached`.
    #[serde(rename = "type")]
    pub property_type: String,
    pub status: String,
    #[serde(default)]
    pub priority: PropertyPriority,
    pub price: u64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub location: PropertyLocation,
    #[serde(default)]
    pub owner_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Human readable label for the property type.
    pub fn type_label(&self) -> &str {
        match self.property_type.as_str() {
            "semiDetached" => "Semi-detached",
            "endOfTerrace" => "End of terrace",
            other => other,
        }
    }

    /// Whether an offer has been accepted on the property.
    pub fn is_under_offer(&self) -> bool {
        self.status == "underOffer"
    }
}
