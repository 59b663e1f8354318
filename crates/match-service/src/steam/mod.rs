//! Steam Web API access.

mod client;
mod types;

pub use client::{SteamClient, SteamError};
pub use types::*;
