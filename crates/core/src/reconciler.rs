//! Message reconciliation
//!
//! Keeps the in-memory view of the active room's messages and decides how
//! each one is presented. Messages move through `Active -> Edited -> Deleted`;
//! `Deleted` is terminal and a deleted message stays in the view as a
//! tombstone.

use std::collections::HashMap;

use tracing::debug;

use crate::context::ChatContext;
use crate::error::{Error, Result};
use crate::invariants::assert_entry_invariants;
use crate::models::{EditRequest, Message, MessageRef};
use crate::permissions::PermissionMatrix;

/// Content shown in place of a deleted message
pub const TOMBSTONE: &str = "This message has been deleted";

/// Lifecycle of a message in the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    Active,
    Edited,
    Deleted,
}

/// Who wrote a message, relative to the session. Styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Own,
    Other,
}

/// Quoted excerpt of the message being replied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPreview {
    pub msg_id: i64,
    pub author_username: String,
    pub content: String,
}

/// Everything the renderer needs to draw one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDescriptor {
    pub msg_id: i64,
    pub author_username: String,
    pub timestamp: String,
    pub content: String,
    pub ownership: Ownership,
    pub state: MessageState,
    /// The message mentions the session user or everyone
    pub mention: bool,
    pub reply_preview: Option<ReplyPreview>,
    /// Raise a system notification for this message
    pub notify: bool,
    pub can_reply: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

/// What the view knows locally about a reply target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalReply {
    Visible(Message),
    Deleted,
    Unknown,
}

/// Result of applying a delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted {
        descriptor: RenderDescriptor,
        /// The pending reply pointed at this message and was cleared
        cleared_reply: bool,
    },
    AlreadyDeleted,
}

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) message: Message,
    pub(crate) state: MessageState,
    pub(crate) ownership: Ownership,
    pub(crate) mention: bool,
    pub(crate) reply_preview: Option<ReplyPreview>,
    may_edit: bool,
    may_delete: bool,
}

impl Entry {
    fn descriptor(&self, notify: bool) -> RenderDescriptor {
        let live = self.state != MessageState::Deleted;
        RenderDescriptor {
            msg_id: self.message.msg_id,
            author_username: self.message.author_username.clone(),
            timestamp: self.message.timestamp.clone(),
            content: self.message.content.clone(),
            ownership: self.ownership,
            state: self.state,
            mention: self.mention,
            reply_preview: self.reply_preview.clone(),
            notify,
            can_reply: live,
            can_edit: live && self.may_edit,
            can_delete: live && self.may_delete,
        }
    }

    fn preview(&self) -> ReplyPreview {
        ReplyPreview {
            msg_id: self.message.msg_id,
            author_username: self.message.author_username.clone(),
            content: self.message.content.clone(),
        }
    }
}

/// Check for `@username` or `@everyone`, ignoring case
pub fn mentions(content: &str, username: &str) -> bool {
    let content = content.to_lowercase();
    if content.contains("@everyone") {
        return true;
    }
    !username.is_empty() && content.contains(&format!("@{}", username.to_lowercase()))
}

/// The visible messages of the active room, in arrival order
#[derive(Debug, Default)]
pub struct MessageReconciler {
    entries: Vec<Entry>,
    index: HashMap<i64, usize>,
}

impl MessageReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Admit a message into the view.
    ///
    /// Returns `None` when the message belongs to another room or is already
    /// shown. `reply_target` is the resolved message for `replying_to`, if
    /// the caller managed to find one.
    pub fn admit(
        &mut self,
        ctx: &mut ChatContext,
        message: Message,
        reply_target: Option<&Message>,
        is_initial_load: bool,
    ) -> Option<RenderDescriptor> {
        if !ctx.is_active_room(&message.room_code) {
            debug!(
                msg_id = message.msg_id,
                room_code = %message.room_code,
                "Discarding message from another room"
            );
            return None;
        }
        if self.index.contains_key(&message.msg_id) {
            debug!(msg_id = message.msg_id, "Ignoring duplicate message");
            return None;
        }

        let session = &ctx.session;
        let ownership = if session.is_author(message.author_id, &message.author_username) {
            Ownership::Own
        } else {
            Ownership::Other
        };
        let mention = mentions(&message.content, &session.username);
        let may_edit =
            PermissionMatrix::can_edit(session, message.author_id, &message.author_username);
        let may_delete =
            PermissionMatrix::can_delete(session, message.author_id, &message.author_username);
        let reply_preview = message
            .replying_to
            .and_then(|target_id| self.resolve_preview(&message, target_id, reply_target));

        let notify =
            ownership == Ownership::Other && ctx.notifications.should_notify(is_initial_load);

        let entry = Entry {
            message,
            state: MessageState::Active,
            ownership,
            mention,
            reply_preview,
            may_edit,
            may_delete,
        };
        let descriptor = entry.descriptor(notify);
        self.index.insert(entry.message.msg_id, self.entries.len());
        self.entries.push(entry);
        Some(descriptor)
    }

    /// Build a preview from the local view first, then from the fetched target
    fn resolve_preview(
        &self,
        message: &Message,
        target_id: i64,
        fetched: Option<&Message>,
    ) -> Option<ReplyPreview> {
        if target_id == message.msg_id {
            debug!(msg_id = target_id, "Message replies to itself, omitting preview");
            return None;
        }
        if let Some(entry) = self.entry(target_id) {
            return match entry.state {
                MessageState::Deleted => None,
                _ => Some(entry.preview()),
            };
        }

        let target = fetched?;
        if target.msg_id != target_id {
            debug!(
                expected = target_id,
                got = target.msg_id,
                "Reply target id mismatch, omitting preview"
            );
            return None;
        }
        if target.room_code != message.room_code {
            debug!(
                target_id,
                room_code = %target.room_code,
                "Reply target is in another room, omitting preview"
            );
            return None;
        }
        if target.content.is_empty() || target.content == TOMBSTONE {
            return None;
        }
        Some(ReplyPreview {
            msg_id: target.msg_id,
            author_username: target.author_username.clone(),
            content: target.content.clone(),
        })
    }

    /// Look up a reply target in the view without touching the network
    pub fn local_reply_target(&self, msg_id: i64) -> LocalReply {
        match self.entry(msg_id) {
            Some(entry) if entry.state == MessageState::Deleted => LocalReply::Deleted,
            Some(entry) => LocalReply::Visible(entry.message.clone()),
            None => LocalReply::Unknown,
        }
    }

    /// Replace a message's content in place
    pub fn edit(&mut self, msg_id: i64, new_content: impl Into<String>) -> Result<RenderDescriptor> {
        let new_content = new_content.into();
        let pos = self.position(msg_id)?;

        let entry = &mut self.entries[pos];
        if entry.state == MessageState::Deleted {
            return Err(Error::InvalidOperation(format!(
                "message {msg_id} is deleted"
            )));
        }
        entry.message.content = new_content.clone();
        entry.state = MessageState::Edited;
        let descriptor = entry.descriptor(false);

        for other in self.entries.iter_mut() {
            if let Some(preview) = other.reply_preview.as_mut() {
                if preview.msg_id == msg_id {
                    preview.content = new_content.clone();
                }
            }
        }

        assert_entry_invariants(&self.entries[pos]);
        Ok(descriptor)
    }

    /// Turn a message into a tombstone. Repeated deletes are no-ops.
    pub fn delete(&mut self, ctx: &mut ChatContext, msg_id: i64) -> Result<DeleteOutcome> {
        let pos = self.position(msg_id)?;

        let entry = &mut self.entries[pos];
        if entry.state == MessageState::Deleted {
            return Ok(DeleteOutcome::AlreadyDeleted);
        }
        entry.message.content = TOMBSTONE.to_string();
        entry.state = MessageState::Deleted;
        let descriptor = entry.descriptor(false);

        for other in self.entries.iter_mut() {
            if other.reply_preview.as_ref().map(|p| p.msg_id) == Some(msg_id) {
                other.reply_preview = None;
            }
        }

        let cleared_reply = ctx.replying_to == Some(msg_id);
        if cleared_reply {
            ctx.replying_to = None;
            debug!(msg_id, "Cleared reply pointer to deleted message");
        }

        assert_entry_invariants(&self.entries[pos]);
        Ok(DeleteOutcome::Deleted {
            descriptor,
            cleared_reply,
        })
    }

    /// Point the next outgoing message at `msg_id`
    pub fn begin_reply(&self, ctx: &mut ChatContext, msg_id: i64) -> Result<ReplyPreview> {
        let entry = self.entry(msg_id).ok_or_else(|| not_found(msg_id))?;
        if entry.state == MessageState::Deleted {
            return Err(Error::InvalidOperation(format!(
                "cannot reply to deleted message {msg_id}"
            )));
        }
        ctx.replying_to = Some(msg_id);
        Ok(entry.preview())
    }

    pub fn clear_reply(&self, ctx: &mut ChatContext) -> Option<i64> {
        ctx.take_reply()
    }

    /// Build the request for committing an edit, if the user may make it.
    ///
    /// Returns `Ok(None)` when the content is blank or unchanged.
    pub fn edit_request(
        &self,
        ctx: &ChatContext,
        msg_id: i64,
        new_content: &str,
    ) -> Result<Option<EditRequest>> {
        let entry = self.live_entry(msg_id)?;
        if !entry.may_edit {
            return Err(Error::PermissionDenied(format!(
                "{} cannot edit message {msg_id}",
                ctx.session.username
            )));
        }
        let new_content = new_content.trim();
        if new_content.is_empty() || new_content == entry.message.content {
            return Ok(None);
        }
        Ok(Some(EditRequest {
            msg_id,
            old_content: entry.message.content.clone(),
            new_content: new_content.to_string(),
        }))
    }

    /// Build the request for deleting a message, if the user may.
    pub fn delete_request(&self, ctx: &ChatContext, msg_id: i64) -> Result<MessageRef> {
        let entry = self.live_entry(msg_id)?;
        if !entry.may_delete {
            return Err(Error::PermissionDenied(format!(
                "{} cannot delete message {msg_id}",
                ctx.session.username
            )));
        }
        Ok(MessageRef { msg_id })
    }

    /// Current descriptor of one message
    pub fn get(&self, msg_id: i64) -> Option<RenderDescriptor> {
        self.entry(msg_id).map(|e| e.descriptor(false))
    }

    /// Messages whose reply preview quotes `msg_id`
    pub fn quoting(&self, msg_id: i64) -> Vec<RenderDescriptor> {
        self.entries
            .iter()
            .filter(|e| e.message.replying_to == Some(msg_id) && e.message.msg_id != msg_id)
            .map(|e| e.descriptor(false))
            .collect()
    }

    fn entry(&self, msg_id: i64) -> Option<&Entry> {
        self.index.get(&msg_id).map(|&pos| &self.entries[pos])
    }

    fn live_entry(&self, msg_id: i64) -> Result<&Entry> {
        let entry = self.entry(msg_id).ok_or_else(|| not_found(msg_id))?;
        if entry.state == MessageState::Deleted {
            return Err(Error::InvalidOperation(format!(
                "message {msg_id} is deleted"
            )));
        }
        Ok(entry)
    }

    fn position(&self, msg_id: i64) -> Result<usize> {
        self.index.get(&msg_id).copied().ok_or_else(|| not_found(msg_id))
    }
}

fn not_found(msg_id: i64) -> Error {
    Error::NotFound(format!("message {msg_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, UserType};

    fn alice_ctx(room: &str) -> ChatContext {
        ChatContext::new(Session::new(1, "alice", UserType::Normal), room)
    }

    fn msg(msg_id: i64, author: &str, content: &str, room: &str) -> Message {
        Message {
            msg_id,
            author_id: 0,
            author_username: author.to_string(),
            content: content.to_string(),
            timestamp: "10:00 AM on Monday, January 01 2024".to_string(),
            room_code: room.to_string(),
            replying_to: None,
        }
    }

    fn reply(msg_id: i64, author: &str, content: &str, to: i64) -> Message {
        Message {
            replying_to: Some(to),
            ..msg(msg_id, author, content, "GLOBAL")
        }
    }

    #[test]
    fn test_admit_only_active_room() {
        let mut ctx = alice_ctx("ABCD");
        let mut view = MessageReconciler::new();

        assert!(view.admit(&mut ctx, msg(1, "bob", "hi", "GLOBAL"), None, false).is_none());
        assert!(view.admit(&mut ctx, msg(2, "bob", "hi", "ABCD"), None, false).is_some());
        assert_eq!(view.len(), 1);
        assert_eq!(view.local_reply_target(1), LocalReply::Unknown);
    }

    #[test]
    fn test_own_message_scenario() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();

        let d = view
            .admit(&mut ctx, msg(10, "alice", "hi", "GLOBAL"), None, false)
            .unwrap();
        assert_eq!(d.ownership, Ownership::Own);
        assert!(d.reply_preview.is_none());
        assert!(d.can_edit && d.can_delete);
        assert!(!d.mention);
    }

    #[test]
    fn test_duplicate_ignored() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        assert!(view.admit(&mut ctx, msg(1, "bob", "a", "GLOBAL"), None, true).is_some());
        assert!(view.admit(&mut ctx, msg(1, "bob", "b", "GLOBAL"), None, false).is_none());
        assert_eq!(view.get(1).unwrap().content, "a");
    }

    #[test]
    fn test_mention_detection() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();

        let d = view.admit(&mut ctx, msg(1, "bob", "hello @Alice", "GLOBAL"), None, false).unwrap();
        assert!(d.mention);
        let d = view.admit(&mut ctx, msg(2, "bob", "@everyone meeting", "GLOBAL"), None, false).unwrap();
        assert!(d.mention);
        let d = view.admit(&mut ctx, msg(3, "bob", "hello alice", "GLOBAL"), None, false).unwrap();
        assert!(!d.mention);

        assert!(mentions("@EVERYONE", ""));
        assert!(!mentions("@", ""));
    }

    #[test]
    fn test_reply_preview_from_view() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        view.admit(&mut ctx, msg(1, "bob", "original", "GLOBAL"), None, false);

        let d = view.admit(&mut ctx, reply(2, "carol", "re", 1), None, false).unwrap();
        let preview = d.reply_preview.unwrap();
        assert_eq!(preview.author_username, "bob");
        assert_eq!(preview.content, "original");
    }

    #[test]
    fn test_reply_preview_from_fetched_target() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        let target = msg(1, "bob", "from server", "GLOBAL");

        let d = view.admit(&mut ctx, reply(2, "carol", "re", 1), Some(&target), false).unwrap();
        assert_eq!(d.reply_preview.unwrap().content, "from server");
    }

    #[test]
    fn test_self_reply_has_no_preview() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        let echoed = msg(7, "bob", "loop", "GLOBAL");

        let d = view.admit(&mut ctx, reply(7, "bob", "loop", 7), Some(&echoed), false).unwrap();
        assert!(d.reply_preview.is_none());

        // Editing it afterwards keeps the view consistent
        let edited = view.edit(7, "unlooped").unwrap();
        assert!(edited.reply_preview.is_none());
        assert_eq!(edited.content, "unlooped");
    }

    #[test]
    fn test_fetched_target_from_other_room_ignored() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        let elsewhere = msg(1, "bob", "secret", "ABCD");

        let d = view.admit(&mut ctx, reply(2, "carol", "re", 1), Some(&elsewhere), false).unwrap();
        assert!(d.reply_preview.is_none());
    }

    #[test]
    fn test_unresolved_reply_still_renders() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();

        let d = view.admit(&mut ctx, reply(2, "carol", "re", 1), None, false).unwrap();
        assert!(d.reply_preview.is_none());

        let tombstoned = msg(3, "bob", TOMBSTONE, "GLOBAL");
        let d = view.admit(&mut ctx, reply(4, "carol", "re", 3), Some(&tombstoned), false).unwrap();
        assert!(d.reply_preview.is_none());

        let wrong = msg(99, "bob", "other", "GLOBAL");
        let d = view.admit(&mut ctx, reply(5, "carol", "re", 3), Some(&wrong), false).unwrap();
        assert!(d.reply_preview.is_none());
    }

    #[test]
    fn test_reply_to_locally_deleted_has_no_preview() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        view.admit(&mut ctx, msg(1, "bob", "original", "GLOBAL"), None, false);
        view.delete(&mut ctx, 1).unwrap();

        let stale = msg(1, "bob", "original", "GLOBAL");
        let d = view.admit(&mut ctx, reply(2, "carol", "re", 1), Some(&stale), false).unwrap();
        assert!(d.reply_preview.is_none());
        assert_eq!(view.local_reply_target(1), LocalReply::Deleted);
    }

    #[test]
    fn test_edit_twice_keeps_last() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        view.admit(&mut ctx, msg(1, "alice", "first", "GLOBAL"), None, false);

        view.edit(1, "c1").unwrap();
        let d = view.edit(1, "c2").unwrap();
        assert_eq!(d.content, "c2");
        assert_eq!(d.state, MessageState::Edited);
        assert_eq!(d.msg_id, 1);
        assert_eq!(d.author_username, "alice");
        assert_eq!(d.timestamp, "10:00 AM on Monday, January 01 2024");
    }

    #[test]
    fn test_edit_refreshes_quotes() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        view.admit(&mut ctx, msg(1, "bob", "typo", "GLOBAL"), None, false);
        view.admit(&mut ctx, reply(2, "carol", "re", 1), None, false);

        view.edit(1, "fixed").unwrap();
        let quoting = view.quoting(1);
        assert_eq!(quoting.len(), 1);
        assert_eq!(quoting[0].reply_preview.as_ref().unwrap().content, "fixed");
    }

    #[test]
    fn test_edit_unknown_or_deleted() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        assert!(matches!(view.edit(1, "x"), Err(Error::NotFound(_))));

        view.admit(&mut ctx, msg(1, "alice", "x", "GLOBAL"), None, false);
        view.delete(&mut ctx, 1).unwrap();
        assert!(matches!(view.edit(1, "y"), Err(Error::InvalidOperation(_))));
        assert_eq!(view.get(1).unwrap().content, TOMBSTONE);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        view.admit(&mut ctx, msg(1, "alice", "bye", "GLOBAL"), None, false);

        let first = view.delete(&mut ctx, 1).unwrap();
        let after_first = view.get(1).unwrap();
        let second = view.delete(&mut ctx, 1).unwrap();

        match first {
            DeleteOutcome::Deleted { descriptor, .. } => {
                assert_eq!(descriptor.content, TOMBSTONE);
                assert!(!descriptor.can_edit && !descriptor.can_delete && !descriptor.can_reply);
            }
            DeleteOutcome::AlreadyDeleted => panic!("first delete should apply"),
        }
        assert_eq!(second, DeleteOutcome::AlreadyDeleted);
        assert_eq!(view.get(1).unwrap(), after_first);
    }

    #[test]
    fn test_delete_drops_quotes_and_clears_reply() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        view.admit(&mut ctx, msg(1, "bob", "original", "GLOBAL"), None, false);
        view.admit(&mut ctx, reply(2, "carol", "re", 1), None, false);
        view.begin_reply(&mut ctx, 1).unwrap();

        match view.delete(&mut ctx, 1).unwrap() {
            DeleteOutcome::Deleted { cleared_reply, .. } => assert!(cleared_reply),
            DeleteOutcome::AlreadyDeleted => panic!("expected delete"),
        }
        assert_eq!(ctx.replying_to, None);
        assert!(view.get(2).unwrap().reply_preview.is_none());
    }

    #[test]
    fn test_begin_reply_rules() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        assert!(view.begin_reply(&mut ctx, 1).is_err());

        view.admit(&mut ctx, msg(1, "bob", "x", "GLOBAL"), None, false);
        let preview = view.begin_reply(&mut ctx, 1).unwrap();
        assert_eq!(preview.author_username, "bob");
        assert_eq!(ctx.replying_to, Some(1));
        assert_eq!(view.clear_reply(&mut ctx), Some(1));
        assert_eq!(ctx.replying_to, None);
    }

    #[test]
    fn test_notification_once_while_hidden() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        ctx.notifications.set_focused(false);

        let own = view.admit(&mut ctx, msg(1, "alice", "mine", "GLOBAL"), None, false).unwrap();
        assert!(!own.notify);
        let a = view.admit(&mut ctx, msg(2, "bob", "one", "GLOBAL"), None, false).unwrap();
        let b = view.admit(&mut ctx, msg(3, "carol", "two", "GLOBAL"), None, false).unwrap();
        assert!(a.notify);
        assert!(!b.notify);

        ctx.notifications.set_focused(true);
        ctx.notifications.set_focused(false);
        let c = view.admit(&mut ctx, msg(4, "bob", "three", "GLOBAL"), None, false).unwrap();
        assert!(c.notify);
    }

    #[test]
    fn test_initial_load_never_notifies() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        ctx.notifications.set_focused(false);
        let d = view.admit(&mut ctx, msg(1, "bob", "old", "GLOBAL"), None, true).unwrap();
        assert!(!d.notify);
    }

    #[test]
    fn test_edit_and_delete_requests_respect_permissions() {
        let mut ctx = alice_ctx("GLOBAL");
        let mut view = MessageReconciler::new();
        view.admit(&mut ctx, msg(1, "alice", "mine", "GLOBAL"), None, false);
        view.admit(&mut ctx, msg(2, "bob", "theirs", "GLOBAL"), None, false);

        let req = view.edit_request(&ctx, 1, " changed ").unwrap().unwrap();
        assert_eq!(req.old_content, "mine");
        assert_eq!(req.new_content, "changed");
        assert_eq!(view.edit_request(&ctx, 1, "mine").unwrap(), None);
        assert_eq!(view.edit_request(&ctx, 1, "   ").unwrap(), None);
        assert!(matches!(
            view.edit_request(&ctx, 2, "hijack"),
            Err(Error::PermissionDenied(_))
        ));

        assert_eq!(view.delete_request(&ctx, 1).unwrap().msg_id, 1);
        assert!(view.delete_request(&ctx, 2).is_err());
    }

    #[test]
    fn test_superuser_may_moderate() {
        let mut ctx = ChatContext::new(Session::new(9, "root", UserType::Superuser), "GLOBAL");
        let mut view = MessageReconciler::new();
        let d = view.admit(&mut ctx, msg(2, "bob", "theirs", "GLOBAL"), None, false).unwrap();
        assert!(d.can_edit && d.can_delete);
        assert!(view.delete_request(&ctx, 2).is_ok());
    }
}
