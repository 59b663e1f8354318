//! WeChat bot answering `@bot q <account_id>` with a player's latest match.

pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod lifecycle;

pub use dispatcher::{Dispatcher, Replier};
pub use lifecycle::Bot;
