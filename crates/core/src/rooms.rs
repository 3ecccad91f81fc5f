//! Public room list and the active room's visibility
//!
//! The server pushes the list of public rooms on connect and a notice every
//! time a room flips between public and private. The tracker mirrors that
//! and never changes the active room's status on its own: a toggle only
//! produces a request, and the indicator moves when the server echoes it.

use tracing::{debug, warn};

use crate::context::ChatContext;
use crate::error::{Error, Result};
use crate::invariants::{assert_global_public, assert_room_code_valid, assert_room_list_invariants};
use crate::models::{is_global, RoomStatusChange, RoomVisibility};
use crate::permissions::PermissionMatrix;

/// What an applied status notice changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusChangeOutcome {
    /// New indicator value, set when the notice was for the active room
    pub indicator: Option<RoomVisibility>,
    /// The code was added to the public list
    pub added: bool,
    /// The code was removed from the public list
    pub removed: bool,
}

#[derive(Debug, Clone)]
pub struct RoomTracker {
    active_room: String,
    /// Public room codes in first-seen order
    public_rooms: Vec<String>,
    indicator: RoomVisibility,
}

impl RoomTracker {
    pub fn new(active_room: impl Into<String>) -> Self {
        let active_room = active_room.into();
        assert_room_code_valid(&active_room, "RoomTracker::new");
        let indicator = if is_global(&active_room) {
            RoomVisibility::Public
        } else {
            RoomVisibility::Private
        };
        Self {
            active_room,
            public_rooms: Vec::new(),
            indicator,
        }
    }

    pub fn active_room(&self) -> &str {
        &self.active_room
    }

    /// Visibility currently shown for the active room
    pub fn status(&self) -> RoomVisibility {
        self.indicator
    }

    pub fn public_rooms(&self) -> &[String] {
        &self.public_rooms
    }

    pub fn is_listed(&self, room_code: &str) -> bool {
        self.public_rooms.iter().any(|c| c == room_code)
    }

    /// Add public room codes, skipping ones already known.
    ///
    /// Returns the codes that were new, in the order given.
    pub fn record_public_rooms<I, S>(&mut self, codes: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = Vec::new();
        for code in codes {
            let code = code.into();
            if self.add(&code) {
                added.push(code);
            }
        }
        if self.is_listed(&self.active_room) {
            self.indicator = RoomVisibility::Public;
        }
        assert_room_list_invariants(self);
        added
    }

    fn add(&mut self, code: &str) -> bool {
        if self.is_listed(code) {
            return false;
        }
        self.public_rooms.push(code.to_string());
        true
    }

    fn remove(&mut self, code: &str) -> bool {
        let before = self.public_rooms.len();
        self.public_rooms.retain(|c| c != code);
        self.public_rooms.len() != before
    }

    /// Apply a `room status changed` notice from the server
    pub fn apply_status_change(&mut self, change: &RoomStatusChange) -> StatusChangeOutcome {
        let private = change.action == RoomVisibility::Private;
        if is_global(&change.room_code) && private {
            warn!("Ignoring request to make the global room private");
            return StatusChangeOutcome::default();
        }
        assert_global_public(&change.room_code, private);

        let mut outcome = StatusChangeOutcome::default();
        if change.room_code == self.active_room {
            self.indicator = change.action;
            outcome.indicator = Some(change.action);
        }
        match change.action {
            RoomVisibility::Public => outcome.added = self.add(&change.room_code),
            RoomVisibility::Private => outcome.removed = self.remove(&change.room_code),
        }
        debug!(
            room_code = %change.room_code,
            action = %change.action,
            added = outcome.added,
            removed = outcome.removed,
            "Applied room status change"
        );
        assert_room_list_invariants(self);
        outcome
    }

    /// Build the request that flips the active room's visibility.
    ///
    /// Superusers only, and never for the global room. The indicator is left
    /// alone until the server confirms.
    pub fn toggle_status(&self, ctx: &ChatContext) -> Result<RoomStatusChange> {
        if is_global(&self.active_room) {
            return Err(Error::InvalidOperation(
                "the global room is always public".into(),
            ));
        }
        if !PermissionMatrix::can_toggle_room(&ctx.session, &self.active_room) {
            return Err(Error::PermissionDenied(format!(
                "{} cannot change room visibility",
                ctx.session.username
            )));
        }
        Ok(RoomStatusChange {
            room_code: self.active_room.clone(),
            action: self.indicator.toggled(),
        })
    }
}
