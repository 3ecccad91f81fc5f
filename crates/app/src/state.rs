//! Connection state management
//!
//! One `ClientState` exists per socket connection and is owned by the
//! dispatcher, so every mutation happens on a single task.

use parley_core::{ChatContext, MessageReconciler, RoomTracker};
use parley_net::Bootstrap;

pub struct ClientState {
    pub ctx: ChatContext,
    pub messages: MessageReconciler,
    pub rooms: RoomTracker,
    /// `client connected` has been sent on this connection
    announced: bool,
}

impl ClientState {
    pub fn new(bootstrap: Bootstrap) -> Self {
        let rooms = RoomTracker::new(bootstrap.room_code.clone());
        Self {
            ctx: ChatContext::new(bootstrap.session, bootstrap.room_code),
            messages: MessageReconciler::new(),
            rooms,
            announced: false,
        }
    }

    /// Mark the connection announced. True only the first time.
    pub fn announce(&mut self) -> bool {
        !std::mem::replace(&mut self.announced, true)
    }
}
