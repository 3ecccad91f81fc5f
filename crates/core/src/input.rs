//! Key handling
//!
//! Maps an Enter press in one of the input boxes to the action the client
//! should take. The caller turns actions into outbound events.

use crate::context::ChatContext;
use crate::error::Result;
use crate::models::{EditRequest, OutgoingMessage};
use crate::reconciler::MessageReconciler;

/// Which input box has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// The message composer
    SendBox,
    /// The "join room" box
    RoomCodeBox,
    /// The inline editor for one message
    EditBox { msg_id: i64 },
    /// Nothing relevant focused
    None,
}

/// What an Enter press should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Send(OutgoingMessage),
    Navigate { room_code: String },
    CommitEdit(EditRequest),
    Ignore,
}

/// Handle Enter with `value` in the focused box.
///
/// Sending consumes the pending reply pointer.
pub fn handle_enter(
    ctx: &mut ChatContext,
    view: &MessageReconciler,
    focus: InputFocus,
    value: &str,
) -> Result<InputAction> {
    let value = value.trim();
    match focus {
        InputFocus::SendBox => {
            if value.is_empty() {
                return Ok(InputAction::Ignore);
            }
            let replying_to = view.clear_reply(ctx);
            Ok(InputAction::Send(OutgoingMessage {
                content: value.to_string(),
                author_id: ctx.session.user_id,
                author_username: ctx.session.username.clone(),
                room_code: ctx.room_code.clone(),
                replying_to,
            }))
        }
        InputFocus::RoomCodeBox => {
            if value.is_empty() {
                return Ok(InputAction::Ignore);
            }
            Ok(InputAction::Navigate {
                room_code: value.to_string(),
            })
        }
        InputFocus::EditBox { msg_id } => Ok(view
            .edit_request(ctx, msg_id, value)?
            .map(InputAction::CommitEdit)
            .unwrap_or(InputAction::Ignore)),
        InputFocus::None => Ok(InputAction::Ignore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Message, Session, UserType};

    fn setup() -> (ChatContext, MessageReconciler) {
        let mut ctx = ChatContext::new(Session::new(1, "alice", UserType::Normal), "ABCD");
        let mut view = MessageReconciler::new();
        view.admit(
            &mut ctx,
            Message {
                msg_id: 7,
                author_id: 1,
                author_username: "alice".to_string(),
                content: "draft".to_string(),
                timestamp: String::new(),
                room_code: "ABCD".to_string(),
                replying_to: None,
            },
            None,
            true,
        );
        (ctx, view)
    }

    #[test]
    fn test_empty_send_ignored() {
        let (mut ctx, view) = setup();
        let action = handle_enter(&mut ctx, &view, InputFocus::SendBox, "   ").unwrap();
        assert_eq!(action, InputAction::Ignore);
    }

    #[test]
    fn test_send_consumes_reply() {
        let (mut ctx, view) = setup();
        view.begin_reply(&mut ctx, 7).unwrap();

        let action = handle_enter(&mut ctx, &view, InputFocus::SendBox, "hello").unwrap();
        match action {
            InputAction::Send(out) => {
                assert_eq!(out.content, "hello");
                assert_eq!(out.author_id, 1);
                assert_eq!(out.room_code, "ABCD");
                assert_eq!(out.replying_to, Some(7));
            }
            other => panic!("unexpected action {other:?}"),
        }
        assert_eq!(ctx.replying_to, None);
    }

    #[test]
    fn test_room_navigation() {
        let (mut ctx, view) = setup();
        let action = handle_enter(&mut ctx, &view, InputFocus::RoomCodeBox, "WXYZ").unwrap();
        assert_eq!(
            action,
            InputAction::Navigate {
                room_code: "WXYZ".to_string()
            }
        );

        let action = handle_enter(&mut ctx, &view, InputFocus::RoomCodeBox, "").unwrap();
        assert_eq!(action, InputAction::Ignore);
    }

    #[test]
    fn test_edit_commit() {
        let (mut ctx, view) = setup();
        let action =
            handle_enter(&mut ctx, &view, InputFocus::EditBox { msg_id: 7 }, "final").unwrap();
        assert_eq!(
            action,
            InputAction::CommitEdit(EditRequest {
                msg_id: 7,
                old_content: "draft".to_string(),
                new_content: "final".to_string(),
            })
        );

        assert!(handle_enter(&mut ctx, &view, InputFocus::EditBox { msg_id: 99 }, "x").is_err());
    }

    #[test]
    fn test_unfocused_enter_ignored() {
        let (mut ctx, view) = setup();
        let action = handle_enter(&mut ctx, &view, InputFocus::None, "hello").unwrap();
        assert_eq!(action, InputAction::Ignore);
    }
}
