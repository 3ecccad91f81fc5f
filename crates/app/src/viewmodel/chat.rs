//! Message event handlers

use parley_core::view::{message_view, notification_text};
use parley_core::{DeleteOutcome, Error, LocalReply, Message, MessageEdited};
use tracing::{debug, warn};

use super::{Dispatch, Dispatcher, ReplySource};
use crate::render::ViewUpdate;

impl<R: ReplySource> Dispatcher<R> {
    /// Admit a message, resolving its reply target first so both render together
    pub(super) async fn admit(&mut self, message: Message, is_initial_load: bool, out: &mut Dispatch) {
        let fetched = match message.replying_to {
            Some(target_id)
                if target_id != message.msg_id
                    && self.state.ctx.is_active_room(&message.room_code) =>
            {
                self.resolve_reply(target_id).await
            }
            _ => None,
        };

        let state = &mut self.state;
        let Some(descriptor) =
            state
                .messages
                .admit(&mut state.ctx, message, fetched.as_ref(), is_initial_load)
        else {
            return;
        };

        if descriptor.notify {
            out.notifications.push(notification_text(&descriptor));
        }
        out.update(ViewUpdate::Append(message_view(&descriptor)));
    }

    /// Fetch a reply target that is not in the view, bounded by the lookup timeout
    async fn resolve_reply(&self, target_id: i64) -> Option<Message> {
        match self.state.messages.local_reply_target(target_id) {
            // The reconciler resolves these itself
            LocalReply::Visible(_) | LocalReply::Deleted => return None,
            LocalReply::Unknown => {}
        }

        match tokio::time::timeout(self.reply_timeout, self.replies.fetch_message(target_id)).await {
            Ok(Ok(found)) => {
                if found.is_none() {
                    debug!(target_id, "Reply target not found");
                }
                found
            }
            Ok(Err(e)) => {
                warn!(target_id, error = %e, "Reply target lookup failed");
                None
            }
            Err(_) => {
                warn!(
                    target_id,
                    timeout_ms = self.reply_timeout.as_millis() as u64,
                    "Reply target lookup timed out"
                );
                None
            }
        }
    }

    pub(super) fn on_edited(&mut self, edit: MessageEdited, out: &mut Dispatch) {
        match self.state.messages.edit(edit.msg_id, edit.new_content) {
            Ok(descriptor) => {
                out.update(ViewUpdate::Replace(message_view(&descriptor)));
                self.redraw_quoting(edit.msg_id, out);
            }
            // Edits for other rooms arrive too
            Err(Error::NotFound(_)) => debug!(msg_id = edit.msg_id, "Edit for message not in view"),
            Err(e) => warn!(msg_id = edit.msg_id, error = %e, "Edit rejected"),
        }
    }

    pub(super) fn on_deleted(&mut self, msg_id: i64, out: &mut Dispatch) {
        let state = &mut self.state;
        match state.messages.delete(&mut state.ctx, msg_id) {
            Ok(DeleteOutcome::Deleted {
                descriptor,
                cleared_reply,
            }) => {
                out.update(ViewUpdate::Replace(message_view(&descriptor)));
                self.redraw_quoting(msg_id, out);
                if cleared_reply {
                    out.update(ViewUpdate::ReplyTarget(None));
                }
            }
            Ok(DeleteOutcome::AlreadyDeleted) => debug!(msg_id, "Message already deleted"),
            Err(e) => debug!(msg_id, error = %e, "Delete for message not in view"),
        }
    }

    fn redraw_quoting(&self, msg_id: i64, out: &mut Dispatch) {
        for descriptor in self.state.messages.quoting(msg_id) {
            out.update(ViewUpdate::Replace(message_view(&descriptor)));
        }
    }
}
