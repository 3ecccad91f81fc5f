//! View-models for the rendering layer
//!
//! Pure mappings from reconciler output to display text. A renderer draws
//! these without needing to know anything about sessions or rooms.

use crate::models::{is_global, RoomVisibility, Session};
use crate::reconciler::{MessageState, Ownership, RenderDescriptor};

/// Affordances offered next to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAction {
    Reply,
    Edit,
    Delete,
}

/// One message, ready to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub msg_id: i64,
    /// "You" for own messages, otherwise the author's username
    pub header: String,
    pub timestamp: String,
    pub body: String,
    /// "author: content" of the quoted message
    pub quote: Option<String>,
    pub own: bool,
    pub highlight: bool,
    pub edited: bool,
    pub deleted: bool,
    pub actions: Vec<MessageAction>,
}

pub fn message_view(descriptor: &RenderDescriptor) -> MessageView {
    let own = descriptor.ownership == Ownership::Own;
    let header = if own {
        "You".to_string()
    } else {
        descriptor.author_username.clone()
    };

    let mut actions = Vec::new();
    if descriptor.can_reply {
        actions.push(MessageAction::Reply);
    }
    if descriptor.can_edit {
        actions.push(MessageAction::Edit);
    }
    if descriptor.can_delete {
        actions.push(MessageAction::Delete);
    }

    MessageView {
        msg_id: descriptor.msg_id,
        header,
        timestamp: descriptor.timestamp.clone(),
        body: descriptor.content.clone(),
        quote: descriptor
            .reply_preview
            .as_ref()
            .map(|p| format!("{}: {}", p.author_username, p.content)),
        own,
        highlight: descriptor.mention,
        edited: descriptor.state == MessageState::Edited,
        deleted: descriptor.state == MessageState::Deleted,
        actions,
    }
}

/// Banner above the composer
pub fn username_banner(session: &Session) -> String {
    format!("Sending messages as {}:", session.username)
}

/// Banner naming the active room
pub fn room_banner(room_code: &str) -> String {
    if is_global(room_code) {
        "Chatting in Global Chat".to_string()
    } else {
        format!("Room Code: {}", room_code)
    }
}

pub fn status_label(visibility: RoomVisibility) -> String {
    visibility.to_string()
}

/// Title and body for a system notification about a message
pub fn notification_text(descriptor: &RenderDescriptor) -> (String, String) {
    (
        format!("New message from {}", descriptor.author_username),
        descriptor.content.clone(),
    )
}
