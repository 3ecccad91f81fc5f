//! System notifications
//!
//! The dispatcher only decides *that* a notification is due; delivering it,
//! including asking for permission the first time, happens here.

use colored::*;
use tracing::debug;

/// Permission to show notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPermission {
    /// Not asked yet
    Default,
    Granted,
    Denied,
}

pub trait Notifier {
    fn permission(&self) -> NotificationPermission;
    fn request_permission(&mut self) -> NotificationPermission;
    fn notify(&mut self, title: &str, body: &str);
}

/// Show a notification, asking for permission first if needed.
///
/// Returns whether anything was shown.
pub fn deliver<N: Notifier + ?Sized>(notifier: &mut N, title: &str, body: &str) -> bool {
    let permission = match notifier.permission() {
        NotificationPermission::Default => notifier.request_permission(),
        other => other,
    };
    if permission != NotificationPermission::Granted {
        debug!(?permission, "Notification suppressed");
        return false;
    }
    notifier.notify(title, body);
    true
}

/// Rings the terminal bell and prints a highlighted line
pub struct TerminalNotifier {
    enabled: bool,
    permission: NotificationPermission,
}

impl TerminalNotifier {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            permission: NotificationPermission::Default,
        }
    }
}

impl Notifier for TerminalNotifier {
    fn permission(&self) -> NotificationPermission {
        self.permission
    }

    fn request_permission(&mut self) -> NotificationPermission {
        self.permission = if self.enabled {
            NotificationPermission::Granted
        } else {
            NotificationPermission::Denied
        };
        self.permission
    }

    fn notify(&mut self, title: &str, body: &str) {
        println!("\x07{} {}", title.bright_yellow().bold(), body);
    }
}
