//! TCP socket client for the chat server
//!
//! One connection per session. A reader task owns the read half and decodes
//! frames; the connection task owns the write half and forwards what the
//! reader produces, so events arrive strictly in the order the server sent
//! them and an emit never interrupts a frame that is still arriving.

use tokio::io::{ReadHalf, WriteHalf};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::frame::{read_frame_bytes, write_frame};
use crate::protocol::{Inbound, Outbound};

/// Event received from the socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketEvent {
    /// The stream is open; the client should bootstrap and announce itself
    Connected { connection_id: Uuid },
    /// A server event
    Inbound(Inbound),
    /// Connection lost or closed
    Disconnected,
}

/// Client handle for socket operations
pub struct SocketClient {
    connection_id: Uuid,
    event_rx: mpsc::Receiver<SocketEvent>,
    cmd_tx: mpsc::Sender<ClientCommand>,
}

enum ClientCommand {
    Emit(Outbound),
    Disconnect,
}

impl SocketClient {
    /// Connect to the chat server's socket
    pub async fn connect<A: ToSocketAddrs + std::fmt::Display>(addr: A) -> Result<Self> {
        let connection_id = Uuid::new_v4();
        info!(addr = %addr, connection_id = %connection_id, "Connecting to server");

        let stream = TcpStream::connect(addr).await?;
        let (reader, writer) = tokio::io::split(stream);

        let (event_tx, event_rx) = mpsc::channel(64);
        let (cmd_tx, cmd_rx) = mpsc::channel(64);

        // The connect event goes first so it precedes anything the server says
        let _ = event_tx.send(SocketEvent::Connected { connection_id }).await;

        tokio::spawn(connection_task(
            connection_id,
            reader,
            writer,
            event_tx,
            cmd_rx,
        ));

        Ok(SocketClient {
            connection_id,
            event_rx,
            cmd_tx,
        })
    }

    pub fn connection_id(&self) -> Uuid {
        self.connection_id
    }

    /// Get the next socket event
    pub async fn next_event(&mut self) -> Option<SocketEvent> {
        self.event_rx.recv().await
    }

    /// Send an event to the server
    pub async fn emit(&self, event: Outbound) -> Result<()> {
        self.cmd_tx
            .send(ClientCommand::Emit(event))
            .await
            .map_err(|_| Error::NotConnected)
    }

    /// Disconnect from the server
    pub async fn disconnect(&self) {
        let _ = self.cmd_tx.send(ClientCommand::Disconnect).await;
    }
}

/// Read frames until the stream ends, forwarding decoded events.
///
/// Runs on its own task: a frame read is never raced against anything, so a
/// partially received frame is always finished.
async fn reader_task(mut reader: ReadHalf<TcpStream>, inbound_tx: mpsc::Sender<Inbound>) {
    loop {
        match read_frame_bytes(&mut reader).await {
            Ok(payload) => match Inbound::from_bytes(&payload) {
                Ok(event) => {
                    debug!(event = event.name(), "Received event");
                    if inbound_tx.send(event).await.is_err() {
                        break;
                    }
                }
                // Frame boundaries are intact, so skip what we can't read
                Err(e) => warn!(error = %e, "Ignoring undecodable event"),
            },
            Err(Error::ConnectionClosed) => {
                debug!("Server closed connection");
                break;
            }
            Err(e) => {
                warn!(error = %e, "Read error");
                break;
            }
        }
    }
}

/// Main connection task
async fn connection_task(
    connection_id: Uuid,
    reader: ReadHalf<TcpStream>,
    mut writer: WriteHalf<TcpStream>,
    event_tx: mpsc::Sender<SocketEvent>,
    mut cmd_rx: mpsc::Receiver<ClientCommand>,
) {
    let (inbound_tx, mut inbound_rx) = mpsc::channel(64);
    let reader = tokio::spawn(reader_task(reader, inbound_tx));

    loop {
        tokio::select! {
            // Incoming event from server
            event = inbound_rx.recv() => {
                let Some(event) = event else {
                    break;
                };
                if event_tx.send(SocketEvent::Inbound(event)).await.is_err() {
                    debug!("Event receiver dropped");
                    break;
                }
            }

            // Outgoing command
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(ClientCommand::Emit(event)) => {
                        debug!(event = event.name(), "Emitting event");
                        if let Err(e) = write_frame(&mut writer, &event).await {
                            warn!(error = %e, "Write error");
                            break;
                        }
                    }
                    Some(ClientCommand::Disconnect) | None => {
                        debug!("Disconnect requested");
                        break;
                    }
                }
            }
        }
    }

    // Cleanup; later emits must fail rather than queue
    reader.abort();
    drop(cmd_rx);
    let _ = event_tx.send(SocketEvent::Disconnected).await;
    info!(connection_id = %connection_id, "Disconnected from server");
}
