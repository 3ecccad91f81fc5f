//! Data models for Parley

mod message;
mod room;
mod session;

pub use message::*;
pub use room::*;
pub use session::*;
