//! Permission checks for chat actions
//!
//! These gate what the client offers; the server enforces the real rules.

use crate::models::{is_global, Session};

/// Actions a user can attempt from the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    // Chat
    SendMessages,
    EditOwnMessages,
    EditOtherMessages,
    DeleteOwnMessages,
    DeleteOtherMessages,

    // Rooms
    ToggleRoomStatus,
}

/// Permission matrix for session roles
pub struct PermissionMatrix;

impl PermissionMatrix {
    /// Check if a session may perform an action
    pub fn can_perform(session: &Session, action: ChatAction) -> bool {
        match action {
            ChatAction::SendMessages => true,
            ChatAction::EditOwnMessages => true,
            ChatAction::DeleteOwnMessages => true,

            // Moderation - superuser only
            ChatAction::EditOtherMessages => session.is_superuser(),
            ChatAction::DeleteOtherMessages => session.is_superuser(),
            ChatAction::ToggleRoomStatus => session.is_superuser(),
        }
    }

    /// Check if a session may edit a message with the given author
    pub fn can_edit(session: &Session, author_id: i64, author_username: &str) -> bool {
        if session.is_author(author_id, author_username) {
            Self::can_perform(session, ChatAction::EditOwnMessages)
        } else {
            Self::can_perform(session, ChatAction::EditOtherMessages)
        }
    }

    /// Check if a session may delete a message with the given author
    pub fn can_delete(session: &Session, author_id: i64, author_username: &str) -> bool {
        if session.is_author(author_id, author_username) {
            Self::can_perform(session, ChatAction::DeleteOwnMessages)
        } else {
            Self::can_perform(session, ChatAction::DeleteOtherMessages)
        }
    }

    /// Check if a session may flip the visibility of a room
    pub fn can_toggle_room(session: &Session, room_code: &str) -> bool {
        // The global room is always public
        !is_global(room_code) && Self::can_perform(session, ChatAction::ToggleRoomStatus)
    }
}
