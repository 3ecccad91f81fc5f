//! Parley Network Library
//!
//! Talks to the chat server over HTTP and a persistent socket.
//!
//! # Architecture
//!
//! - **Api**: JSON endpoints for identity, room code and message lookups
//! - **Bootstrap**: fetches identity and room before anything renders
//! - **Client**: socket connection carrying named events
//! - **Protocol**: length-prefixed JSON event envelopes
//!
//! # Usage
//!
//! ```ignore
//! let api = ApiClient::new(&ApiConfig::new("http://127.0.0.1:5000"))?;
//! let mut socket = SocketClient::connect("127.0.0.1:5001").await?;
//!
//! while let Some(event) = socket.next_event().await {
//!     match event {
//!         SocketEvent::Connected { .. } => {
//!             let boot = fetch_session(&api).await?;
//!             socket.emit(Outbound::ClientConnected).await?;
//!         }
//!         SocketEvent::Inbound(Inbound::NewMessage(msg)) => { /* handle */ }
//!         _ => {}
//!     }
//! }
//! ```

pub mod api;
pub mod bootstrap;
pub mod client;
pub mod error;
mod frame;
pub mod protocol;

pub use api::{ApiClient, ApiConfig};
pub use bootstrap::{fetch_legacy_session, fetch_session, Bootstrap};
pub use client::{SocketClient, SocketEvent};
pub use error::{Error, Result};
pub use protocol::{Inbound, Outbound, StateSync};

/// Default socket port for Parley servers
pub const DEFAULT_SOCKET_PORT: u16 = 5001;
