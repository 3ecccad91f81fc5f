//! Room model - rooms partition messages by room code

use serde::{Deserialize, Serialize};

/// The default room, always public
pub const GLOBAL_ROOM: &str = "GLOBAL";

/// Whether a room is listed publicly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomVisibility {
    Public,
    Private,
}

impl RoomVisibility {
    pub fn toggled(self) -> Self {
        match self {
            RoomVisibility::Public => RoomVisibility::Private,
            RoomVisibility::Private => RoomVisibility::Public,
        }
    }
}

impl std::fmt::Display for RoomVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomVisibility::Public => write!(f, "Public"),
            RoomVisibility::Private => write!(f, "Private"),
        }
    }
}

/// A room visibility change, sent as a request and echoed back as a notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatusChange {
    pub room_code: String,
    pub action: RoomVisibility,
}

/// Normalize a user-supplied room code; blank means the global room
pub fn normalize_room_code(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        GLOBAL_ROOM.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn is_global(room_code: &str) -> bool {
    room_code == GLOBAL_ROOM
}
