//! Terminal rendering
//!
//! The dispatcher emits `ViewUpdate`s; a renderer draws them. The terminal
//! renderer appends lines, so a changed message is drawn again with a
//! marker rather than rewritten in place.

use colored::*;
use parley_core::view::status_label;
use parley_core::{MessageAction, MessageView, RoomVisibility};

/// A change the display should reflect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Identity and room banners, shown once per connection
    Banner {
        username: String,
        room: String,
    },
    /// A newly admitted message
    Append(MessageView),
    /// A message already shown has changed
    Replace(MessageView),
    PublicRoomAdded(String),
    PublicRoomRemoved(String),
    RoomStatus(RoomVisibility),
    /// The pending reply target, as "author: content"
    ReplyTarget(Option<String>),
    /// Feedback for a rejected user action
    Notice(String),
}

pub trait ViewRenderer {
    fn apply(&mut self, update: &ViewUpdate);
}

/// Format one message view as a single line
pub fn format_message(view: &MessageView) -> String {
    let mut line = String::new();
    if let Some(quote) = &view.quote {
        line.push_str(&format!("  ┌ {}\n", quote));
    }
    line.push_str(&format!("[{}] {} ({})", view.msg_id, view.header, view.timestamp));
    line.push_str(": ");
    line.push_str(&view.body);
    if view.edited {
        line.push_str(" (edited)");
    }
    if !view.actions.is_empty() {
        let actions: Vec<&str> = view
            .actions
            .iter()
            .map(|a| match a {
                MessageAction::Reply => "reply",
                MessageAction::Edit => "edit",
                MessageAction::Delete => "delete",
            })
            .collect();
        line.push_str(&format!("  [{}]", actions.join("|")));
    }
    line
}

/// Prints updates to stdout
#[derive(Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    fn paint(view: &MessageView, line: String) -> ColoredString {
        if view.deleted {
            line.dimmed()
        } else if view.highlight {
            line.bright_yellow()
        } else if view.own {
            line.cyan()
        } else {
            line.normal()
        }
    }
}

impl ViewRenderer for TerminalRenderer {
    fn apply(&mut self, update: &ViewUpdate) {
        match update {
            ViewUpdate::Banner { username, room } => {
                println!("{}", room.bright_cyan().bold());
                println!("{}", username.bold());
            }
            ViewUpdate::Append(view) => {
                println!("{}", Self::paint(view, format_message(view)));
            }
            ViewUpdate::Replace(view) => {
                let line = format!("~ {}", format_message(view));
                println!("{}", Self::paint(view, line));
            }
            ViewUpdate::PublicRoomAdded(code) => println!("{} {}", "+ public room".green(), code),
            ViewUpdate::PublicRoomRemoved(code) => println!("{} {}", "- public room".red(), code),
            ViewUpdate::RoomStatus(status) => {
                println!("{} {}", "Room status:".bold(), status_label(*status))
            }
            ViewUpdate::ReplyTarget(Some(target)) => {
                println!("{} {}", "Replying to".italic(), target)
            }
            ViewUpdate::ReplyTarget(None) => println!("{}", "Not replying".italic()),
            ViewUpdate::Notice(text) => println!("{}", text.red()),
        }
    }
}
