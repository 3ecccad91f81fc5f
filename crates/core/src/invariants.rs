//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::is_global;
use crate::reconciler::{Entry, MessageState, TOMBSTONE};
use crate::rooms::RoomTracker;

/// Validate that a view entry's state and content agree
pub(crate) fn assert_entry_invariants(entry: &Entry) {
    let deleted = entry.state == MessageState::Deleted;

    // Deleted messages show exactly the tombstone
    debug_assert!(
        !deleted || entry.message.content == TOMBSTONE,
        "Message {} is deleted but shows {:?}",
        entry.message.msg_id,
        entry.message.content
    );

    // A message never quotes itself
    debug_assert!(
        entry
            .reply_preview
            .as_ref()
            .map_or(true, |p| p.msg_id != entry.message.msg_id),
        "Message {} quotes itself",
        entry.message.msg_id
    );
}

/// Validate that the public room list has no duplicates
pub fn assert_room_list_invariants(tracker: &RoomTracker) {
    let rooms = tracker.public_rooms();
    for (i, code) in rooms.iter().enumerate() {
        debug_assert!(
            !rooms[i + 1..].contains(code),
            "Room {} listed twice",
            code
        );
    }
}

/// Validate that a room code is usable
pub fn assert_room_code_valid(room_code: &str, context: &str) {
    debug_assert!(
        !room_code.trim().is_empty(),
        "Empty room code in context: {}",
        context
    );
}

/// Validate that the global room is never reported private
pub fn assert_global_public(room_code: &str, private: bool) {
    debug_assert!(
        !(is_global(room_code) && private),
        "Global room reported private"
    );
}
