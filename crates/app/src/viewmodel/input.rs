//! User command handling
//!
//! Terminal lines are parsed into [`UserCommand`]s. Plain text goes to the
//! send box; slash commands stand in for the buttons and input boxes of the
//! chat page.

use parley_core::input::handle_enter;
use parley_core::{normalize_room_code, InputAction, InputFocus};
use parley_net::Outbound;
use tracing::{debug, warn};

use super::{Dispatch, Dispatcher, ReplySource};
use crate::render::ViewUpdate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Enter pressed with `value` in the focused box
    Enter { focus: InputFocus, value: String },
    Reply(i64),
    CancelReply,
    Delete(i64),
    ToggleRoom,
    /// The window gained (true) or lost (false) focus
    Focus(bool),
    Quit,
}

/// Parse one line of terminal input
pub fn parse_line(line: &str) -> Result<UserCommand, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(UserCommand::Enter {
            focus: InputFocus::SendBox,
            value: line.to_string(),
        });
    };

    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };
    match name {
        "edit" => {
            let (id, text) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
            Ok(UserCommand::Enter {
                focus: InputFocus::EditBox {
                    msg_id: parse_id(id)?,
                },
                value: text.to_string(),
            })
        }
        "room" => Ok(UserCommand::Enter {
            focus: InputFocus::RoomCodeBox,
            value: args.to_string(),
        }),
        "reply" => Ok(UserCommand::Reply(parse_id(args)?)),
        "cancel" => Ok(UserCommand::CancelReply),
        "delete" => Ok(UserCommand::Delete(parse_id(args)?)),
        "toggle" => Ok(UserCommand::ToggleRoom),
        "away" => Ok(UserCommand::Focus(false)),
        "back" => Ok(UserCommand::Focus(true)),
        "quit" | "exit" => Ok(UserCommand::Quit),
        other => Err(format!("Unknown command /{other}")),
    }
}

fn parse_id(value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Expected a message id, got '{}'", value.trim()))
}

impl<R: ReplySource> Dispatcher<R> {
    /// Handle one user command
    pub fn handle_command(&mut self, command: UserCommand) -> Dispatch {
        let mut out = Dispatch::default();
        let state = &mut self.state;
        match command {
            UserCommand::Enter { focus, value } => {
                let replying = state.ctx.replying_to.is_some();
                match handle_enter(&mut state.ctx, &state.messages, focus, &value) {
                    Ok(InputAction::Send(message)) => {
                        debug!(room_code = %message.room_code, replying_to = ?message.replying_to, "Sending message");
                        out.outbound.push(Outbound::SendMessage(message));
                        if replying {
                            out.update(ViewUpdate::ReplyTarget(None));
                        }
                    }
                    Ok(InputAction::Navigate { room_code }) => {
                        out.navigate = Some(normalize_room_code(&room_code));
                    }
                    Ok(InputAction::CommitEdit(request)) => {
                        out.outbound.push(Outbound::EditMessage(request));
                    }
                    Ok(InputAction::Ignore) => {}
                    Err(e) => {
                        warn!(error = %e, "Input rejected");
                        out.notice(e.to_string());
                    }
                }
            }
            UserCommand::Reply(msg_id) => match state.messages.begin_reply(&mut state.ctx, msg_id) {
                Ok(preview) => out.update(ViewUpdate::ReplyTarget(Some(format!(
                    "{}: {}",
                    preview.author_username, preview.content
                )))),
                Err(e) => out.notice(e.to_string()),
            },
            UserCommand::CancelReply => {
                if state.messages.clear_reply(&mut state.ctx).is_some() {
                    out.update(ViewUpdate::ReplyTarget(None));
                }
            }
            UserCommand::Delete(msg_id) => match state.messages.delete_request(&state.ctx, msg_id) {
                Ok(request) => out.outbound.push(Outbound::DeleteMessage(request)),
                Err(e) => {
                    warn!(msg_id, error = %e, "Delete rejected");
                    out.notice(e.to_string());
                }
            },
            UserCommand::ToggleRoom => match state.rooms.toggle_status(&state.ctx) {
                Ok(request) => out.outbound.push(Outbound::RoomStatusUpdate(request)),
                Err(e) => {
                    warn!(error = %e, "Room toggle rejected");
                    out.notice(e.to_string());
                }
            },
            UserCommand::Focus(focused) => {
                debug!(focused, "Focus changed");
                state.ctx.notifications.set_focused(focused);
            }
            UserCommand::Quit => out.quit = true,
        }
        out
    }
}
