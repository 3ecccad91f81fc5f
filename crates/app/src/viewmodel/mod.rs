//! Event dispatch
//!
//! The dispatcher owns all per-connection state and is the only thing that
//! mutates it. Each inbound socket event and each user command is handled to
//! completion before the next one, and the result comes back as a
//! [`Dispatch`]: what to draw, what to send, what to notify about.

mod chat;
mod input;
mod rooms;

use std::time::Duration;

use parley_core::view::{room_banner, username_banner};
use parley_core::Message;
use parley_net::{ApiClient, Bootstrap, Inbound, Outbound};

use crate::render::ViewUpdate;
use crate::state::ClientState;

pub use input::{parse_line, UserCommand};

/// Where reply targets come from when they are not already in view
pub trait ReplySource {
    async fn fetch_message(&self, msg_id: i64) -> parley_net::Result<Option<Message>>;
}

impl ReplySource for ApiClient {
    async fn fetch_message(&self, msg_id: i64) -> parley_net::Result<Option<Message>> {
        self.get_message_by_id(msg_id).await
    }
}

/// Everything one handled event asks the outside world to do
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub updates: Vec<ViewUpdate>,
    pub outbound: Vec<Outbound>,
    /// (title, body) pairs to raise as system notifications
    pub notifications: Vec<(String, String)>,
    /// Room to switch to; the connection is torn down and rebuilt
    pub navigate: Option<String>,
    pub quit: bool,
}

impl Dispatch {
    fn update(&mut self, update: ViewUpdate) {
        self.updates.push(update);
    }

    fn notice(&mut self, text: impl Into<String>) {
        self.updates.push(ViewUpdate::Notice(text.into()));
    }
}

pub struct Dispatcher<R> {
    state: ClientState,
    replies: R,
    reply_timeout: Duration,
}

impl<R: ReplySource> Dispatcher<R> {
    pub fn new(bootstrap: Bootstrap, replies: R, reply_timeout: Duration) -> Self {
        Self {
            state: ClientState::new(bootstrap),
            replies,
            reply_timeout,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Draw the banners and announce the client to the server (once)
    pub fn start(&mut self) -> Dispatch {
        let mut out = Dispatch::default();
        out.update(ViewUpdate::Banner {
            username: username_banner(&self.state.ctx.session),
            room: room_banner(&self.state.ctx.room_code),
        });
        out.update(ViewUpdate::RoomStatus(self.state.rooms.status()));
        if self.state.announce() {
            out.outbound.push(Outbound::ClientConnected);
        }
        out
    }

    /// Handle one server event
    pub async fn handle_inbound(&mut self, event: Inbound) -> Dispatch {
        let mut out = Dispatch::default();
        match event {
            Inbound::AfterConnection(sync) => {
                self.on_public_rooms(sync.public_rooms, &mut out);
                for message in sync.messages {
                    self.admit(message, true, &mut out).await;
                }
            }
            Inbound::NewMessage(message) => self.admit(message, false, &mut out).await,
            Inbound::MessageEdited(edit) => self.on_edited(edit, &mut out),
            Inbound::MessageDeleted(deleted) => self.on_deleted(deleted.msg_id, &mut out),
            Inbound::RoomStatusChanged(change) => self.on_status_changed(&change, &mut out),
        }
        out
    }
}
