//! Wallet session service.
//!
//! - `controller`: user actions over the connected account
//! - `store`: durable persistence of the connected account
//! - `surface`: rendering of the wallet view, feed and lookups

mod controller;
mod error;
mod store;
mod surface;

pub use controller::SessionController;
pub use error::SessionError;
pub use store::{FileSessionStore, SessionStore};
pub use surface::{history_lines, wallet_lines, PresentationSurface, TerminalSurface};
