use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery state of a message as seen by its receiver.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sent,
    Read,
    Archived,
}

impl MessageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageStatus::Sent => "sent",
            MessageStatus::Read => "read",
            MessageStatus::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sent" => Some(MessageStatus::Sent),
            "read" => Some(MessageStatus::Read),
            "archived" => Some(MessageStatus::Archived),
            _ => None,
        }
    }

    /// Label shown to the receiver; a sent message is still unread.
    pub fn label(self) -> &'static str {
        match self {
            MessageStatus::Sent => "Unread",
            MessageStatus::Read => "Read",
            MessageStatus::Archived => "Archived",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    pub property_id: String,
    pub sender_email: String,
    #[serde(default)]
    pub sender_phone: Option<String>,
    pub body: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_record() {
        let message: Message = serde_json::from_value(serde_json::json!({
            "_id": "m1",
            "propertyId": "61a0",
            "senderEmail": "buyer@example.com",
            "body": "Is the garden south facing?",
            "status": "sent",
            "createdAt": "2021-11-20T10:00:00Z",
            "updatedAt": "2021-11-20T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(message.status, MessageStatus::Sent);
        assert_eq!(message.status.label(), "Unread");
        assert_eq!(message.sender_phone, None);
    }
}
