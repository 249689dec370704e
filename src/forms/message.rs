use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::message::MessageStatus;
use crate::domain::search::{FilterUpdate, SearchParams};
use crate::forms::{FormError, SortDirection, deserialize_choice, non_blank};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MessageSort {
    /// Received time.
    CreatedAt,
    /// Status changed time.
    UpdatedAt,
}

impl MessageSort {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageSort::CreatedAt => "createdAt",
            MessageSort::UpdatedAt => "updatedAt",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "createdAt" => Some(MessageSort::CreatedAt),
            "updatedAt" => Some(MessageSort::UpdatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data of the message filter panel.
pub struct MessageFilterForm {
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub sort: Option<MessageSort>,
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub sort_direction: Option<SortDirection>,
    /// `None` shows messages in every status.
    #[serde(default, deserialize_with = "deserialize_choice")]
    pub status: Option<MessageStatus>,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub property_id: Option<String>,
}

impl MessageFilterForm {
    /// Prefills the form from the current search.
    pub fn from_params(params: &SearchParams) -> Self {
        Self {
            sort: params.filter("sort").and_then(MessageSort::parse),
            sort_direction: params.filter("sortDirection").and_then(SortDirection::parse),
            status: params.filter("status").and_then(MessageStatus::parse),
            property_id: params.filter("propertyId").map(str::to_string),
        }
    }

    /// Validates the form and converts it into filter values.
    pub fn into_update(self) -> Result<FilterUpdate, FormError> {
        self.validate()?;

        Ok(FilterUpdate::new()
            .set_or_clear("sort", self.sort.map(MessageSort::as_str))
            .set_or_clear("sortDirection", self.sort_direction.map(SortDirection::as_str))
            .set_or_clear("status", self.status.map(MessageStatus::as_str))
            .set_or_clear("propertyId", non_blank(self.property_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::domain::resource::MESSAGES;

    #[test]
    fn all_statuses_is_an_empty_choice() {
        let form: MessageFilterForm =
            serde_html_form::from_str("sort=updatedAt&sortDirection=desc&status=&propertyId=61a0")
                .unwrap();

        assert_eq!(form.sort, Some(MessageSort::UpdatedAt));
        assert_eq!(form.status, None);
        assert_eq!(form.property_id.as_deref(), Some("61a0"));
    }

    #[test]
    fn all_statuses_clears_status_filter() {
        let mut params = codec::decode(&MESSAGES, "status=read&sort=createdAt");
        let form: MessageFilterForm =
            serde_html_form::from_str("sort=&sortDirection=&status=").unwrap();

        params.apply(&form.into_update().unwrap()).unwrap();

        assert_eq!(params.filter("status"), None);
        assert_eq!(params.filter("sort"), None);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let form = serde_html_form::from_str::<MessageFilterForm>("status=deleted");
        assert!(form.is_err());
    }

    #[test]
    fn update_keeps_receiver_filter() {
        let mut params = codec::decode(&MESSAGES, "receiverUserId=u1&status=read");
        let form = MessageFilterForm {
            status: Some(MessageStatus::Archived),
            ..Default::default()
        };

        params.apply(&form.into_update().unwrap()).unwrap();

        assert_eq!(params.filter("status"), Some("archived"));
        assert_eq!(params.filter("receiverUserId"), Some("u1"));
    }

    #[test]
    fn prefills_from_params() {
        let params = codec::decode(&MESSAGES, "sort=createdAt&status=sent&propertyId=p9");

        let form = MessageFilterForm::from_params(&params);

        assert_eq!(form.sort, Some(MessageSort::CreatedAt));
        assert_eq!(form.status, Some(MessageStatus::Sent));
        assert_eq!(form.property_id.as_deref(), Some("p9"));
    }
}
