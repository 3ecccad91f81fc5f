//! Socket event types
//!
//! Every frame carries one named event: `{"event": <name>, "data": <payload>}`.
//! Payload shapes come from `parley_core::models`.

use parley_core::{
    EditRequest, Message, MessageEdited, MessageRef, OutgoingMessage, RoomStatusChange,
};
use serde::{Deserialize, Serialize};

/// Full state sent once after the client announces itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSync {
    /// Earlier servers send this list under `data`
    #[serde(default, alias = "data")]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub public_rooms: Vec<String>,
}

/// Events pushed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum Inbound {
    #[serde(rename = "after connection")]
    AfterConnection(StateSync),

    #[serde(rename = "new message")]
    NewMessage(Message),

    #[serde(rename = "message edited")]
    MessageEdited(MessageEdited),

    #[serde(rename = "message deleted")]
    MessageDeleted(MessageRef),

    #[serde(rename = "room status changed")]
    RoomStatusChanged(RoomStatusChange),
}

/// Events sent by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum Outbound {
    /// Ready to receive the state sync
    #[serde(rename = "client connected")]
    ClientConnected,

    #[serde(rename = "send message")]
    SendMessage(OutgoingMessage),

    #[serde(rename = "on message edit")]
    EditMessage(EditRequest),

    #[serde(rename = "on message delete")]
    DeleteMessage(MessageRef),

    #[serde(rename = "room status update")]
    RoomStatusUpdate(RoomStatusChange),
}

impl Inbound {
    /// Wire name of the event, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Inbound::AfterConnection(_) => "after connection",
            Inbound::NewMessage(_) => "new message",
            Inbound::MessageEdited(_) => "message edited",
            Inbound::MessageDeleted(_) => "message deleted",
            Inbound::RoomStatusChanged(_) => "room status changed",
        }
    }

    /// Deserialize event from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

impl Outbound {
    /// Wire name of the event, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Outbound::ClientConnected => "client connected",
            Outbound::SendMessage(_) => "send message",
            Outbound::EditMessage(_) => "on message edit",
            Outbound::DeleteMessage(_) => "on message delete",
            Outbound::RoomStatusUpdate(_) => "room status update",
        }
    }
}
