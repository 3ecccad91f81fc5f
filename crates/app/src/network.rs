//! Connection runner
//!
//! Drives one socket connection from connect to teardown: bootstraps the
//! session once the stream is up, then feeds server events and user input
//! through the dispatcher and carries out whatever it asks for.

use parley_net::{fetch_legacy_session, fetch_session, ApiClient, SocketClient, SocketEvent};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::notify::{self, Notifier};
use crate::render::{ViewRenderer, ViewUpdate};
use crate::viewmodel::{parse_line, Dispatch, Dispatcher};

/// Why a connection ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user asked for another room; reconnect after entering it
    Navigate(String),
    Quit,
    /// The server closed the stream
    Disconnected,
}

/// Run one connection until it ends.
///
/// Input lines are only read once the session is bootstrapped, so anything
/// typed earlier waits in the channel.
pub async fn run_session<V, N>(
    config: &ClientConfig,
    api: &ApiClient,
    input: &mut mpsc::Receiver<String>,
    renderer: &mut V,
    notifier: &mut N,
) -> Result<SessionEnd>
where
    V: ViewRenderer,
    N: Notifier,
{
    let mut socket = SocketClient::connect(config.socket_addr.as_str()).await?;
    let mut dispatcher: Option<Dispatcher<ApiClient>> = None;

    loop {
        tokio::select! {
            event = socket.next_event() => {
                match event {
                    Some(SocketEvent::Connected { connection_id }) => {
                        let bootstrap = if config.legacy_identity {
                            fetch_legacy_session(api).await
                        } else {
                            fetch_session(api).await
                        };
                        let bootstrap = match bootstrap {
                            Ok(b) => b,
                            Err(e) => {
                                socket.disconnect().await;
                                return Err(e.into());
                            }
                        };
                        info!(connection_id = %connection_id, room_code = %bootstrap.room_code, "Connection ready");

                        let mut d = Dispatcher::new(bootstrap, api.clone(), config.reply_lookup_timeout());
                        let out = d.start();
                        dispatcher = Some(d);
                        if let Some(end) = apply(&socket, renderer, notifier, out).await {
                            return Ok(end);
                        }
                    }
                    Some(SocketEvent::Inbound(event)) => {
                        let Some(d) = dispatcher.as_mut() else {
                            debug!(event = event.name(), "Event before bootstrap, dropping");
                            continue;
                        };
                        debug!(event = event.name(), "Handling event");
                        let out = d.handle_inbound(event).await;
                        if let Some(end) = apply(&socket, renderer, notifier, out).await {
                            return Ok(end);
                        }
                    }
                    Some(SocketEvent::Disconnected) | None => {
                        let shown = dispatcher.as_ref().map_or(0, |d| d.state().messages.len());
                        info!(connection_id = %socket.connection_id(), messages = shown, "Disconnected");
                        return Ok(SessionEnd::Disconnected);
                    }
                }
            }

            line = input.recv(), if dispatcher.is_some() => {
                let Some(line) = line else {
                    debug!("Input closed");
                    socket.disconnect().await;
                    return Ok(SessionEnd::Quit);
                };
                let Some(d) = dispatcher.as_mut() else {
                    continue;
                };
                let out = match parse_line(&line) {
                    Ok(command) => d.handle_command(command),
                    Err(reason) => {
                        renderer.apply(&ViewUpdate::Notice(reason));
                        continue;
                    }
                };
                if let Some(end) = apply(&socket, renderer, notifier, out).await {
                    return Ok(end);
                }
            }
        }
    }
}

/// Carry out a dispatch. Returns how the session ends, if it does.
async fn apply<V, N>(
    socket: &SocketClient,
    renderer: &mut V,
    notifier: &mut N,
    out: Dispatch,
) -> Option<SessionEnd>
where
    V: ViewRenderer,
    N: Notifier,
{
    for update in &out.updates {
        renderer.apply(update);
    }
    for event in out.outbound {
        let name = event.name();
        if let Err(e) = socket.emit(event).await {
            warn!(event = name, error = %e, "Failed to emit event");
        }
    }
    for (title, body) in &out.notifications {
        notify::deliver(notifier, title, body);
    }

    if let Some(room_code) = out.navigate {
        info!(room_code = %room_code, "Switching rooms");
        socket.disconnect().await;
        return Some(SessionEnd::Navigate(room_code));
    }
    if out.quit {
        socket.disconnect().await;
        return Some(SessionEnd::Quit);
    }
    None
}
