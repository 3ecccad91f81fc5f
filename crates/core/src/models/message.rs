//! Message model and the payloads that carry message changes

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A chat message as delivered by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub msg_id: i64,
    #[serde(default)]
    pub author_id: i64,
    pub author_username: String,
    pub content: String,
    /// Server-formatted display timestamp
    #[serde(default)]
    pub timestamp: String,
    pub room_code: String,
    #[serde(
        default,
        deserialize_with = "reply_ref::deserialize",
        serialize_with = "reply_ref::serialize"
    )]
    pub replying_to: Option<i64>,
}

/// Payload of an outgoing `send message` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub content: String,
    pub author_id: i64,
    pub author_username: String,
    pub room_code: String,
    #[serde(
        default,
        deserialize_with = "reply_ref::deserialize",
        serialize_with = "reply_ref::serialize"
    )]
    pub replying_to: Option<i64>,
}

/// Server notice that a message's content changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEdited {
    pub msg_id: i64,
    pub new_content: String,
}

/// Client request to change a message's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    pub msg_id: i64,
    pub old_content: String,
    pub new_content: String,
}

/// A message id, used both for delete requests and delete notices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    pub msg_id: i64,
}

/// Reply references travel as an integer where 0 means "not a reply".
mod reply_ref {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<i64>::deserialize(deserializer)?;
        Ok(raw.filter(|id| *id != 0))
    }

    pub fn serialize<S>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Message {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_zero_reply_is_none() {
        let m = parse(
            r#"{"msg_id": 10, "author_username": "alice", "content": "hi",
                "room_code": "GLOBAL", "replying_to": 0}"#,
        );
        assert_eq!(m.replying_to, None);
        assert_eq!(m.author_id, 0);
    }

    #[test]
    fn test_null_or_missing_reply_is_none() {
        let m = parse(
            r#"{"msg_id": 1, "author_username": "a", "content": "x",
                "room_code": "GLOBAL", "replying_to": null}"#,
        );
        assert_eq!(m.replying_to, None);

        let m = parse(r#"{"msg_id": 1, "author_username": "a", "content": "x", "room_code": "GLOBAL"}"#);
        assert_eq!(m.replying_to, None);
    }

    #[test]
    fn test_reply_reference_kept() {
        let m = parse(
            r#"{"msg_id": 2, "author_username": "a", "content": "x",
                "room_code": "GLOBAL", "replying_to": 1}"#,
        );
        assert_eq!(m.replying_to, Some(1));
    }

    #[test]
    fn test_outgoing_without_reply_sends_zero() {
        let out = OutgoingMessage {
            content: "hello".to_string(),
            author_id: 1,
            author_username: "alice".to_string(),
            room_code: "GLOBAL".to_string(),
            replying_to: None,
        };
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["replying_to"], 0);
        assert_eq!(value["room_code"], "GLOBAL");
    }
}
