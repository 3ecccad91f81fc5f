//! Connection-scoped chat context
//!
//! Everything a handler needs to know about "who am I and where am I" lives
//! here and is passed explicitly. A new context is built for every
//! connection, so nothing leaks across a room switch.

use tracing::debug;

use crate::models::Session;

/// Tracks document focus and whether the current hidden interval has
/// already produced a notification.
#[derive(Debug, Clone)]
pub struct NotificationGate {
    focused: bool,
    notified: bool,
}

impl Default for NotificationGate {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationGate {
    pub fn new() -> Self {
        Self {
            focused: true,
            notified: false,
        }
    }

    /// Record a focus change. Regaining focus re-arms notifications.
    pub fn set_focused(&mut self, focused: bool) {
        if focused && !self.focused {
            debug!("Focus regained, notifications re-armed");
        }
        self.focused = focused;
        if focused {
            self.notified = false;
        }
    }

    /// Decide whether a newly admitted message should notify, consuming the
    /// hidden interval's single notification if so.
    pub fn should_notify(&mut self, is_initial_load: bool) -> bool {
        if self.focused || is_initial_load || self.notified {
            return false;
        }
        self.notified = true;
        true
    }
}

/// State scoped to one socket connection
#[derive(Debug, Clone)]
pub struct ChatContext {
    pub session: Session,
    /// The active room; only its messages are shown
    pub room_code: String,
    /// Message the next outgoing send replies to
    pub replying_to: Option<i64>,
    pub notifications: NotificationGate,
}

impl ChatContext {
    pub fn new(session: Session, room_code: impl Into<String>) -> Self {
        Self {
            session,
            room_code: room_code.into(),
            replying_to: None,
            notifications: NotificationGate::new(),
        }
    }

    pub fn is_active_room(&self, room_code: &str) -> bool {
        self.room_code == room_code
    }

    /// Take the pending reply target, leaving none behind
    pub fn take_reply(&mut self) -> Option<i64> {
        self.replying_to.take()
    }
}
