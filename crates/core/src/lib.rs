//! Parley Core Library
//!
//! Chat models, message reconciliation, room tracking, and view-models for
//! the Parley client. Nothing in this crate performs I/O; the network and
//! application crates feed events in and render what comes out.

pub mod context;
pub mod error;
pub mod input;
pub mod invariants;
pub mod models;
pub mod permissions;
pub mod reconciler;
pub mod rooms;
pub mod view;

pub use context::{ChatContext, NotificationGate};
pub use error::{Error, Result};
pub use input::{InputAction, InputFocus};
pub use models::*;
pub use permissions::*;
pub use reconciler::{
    DeleteOutcome, LocalReply, MessageReconciler, MessageState, Ownership, RenderDescriptor,
    ReplyPreview, TOMBSTONE,
};
pub use rooms::{RoomTracker, StatusChangeOutcome};
pub use view::{MessageAction, MessageView};
