//! Client for the `/match/latest` record service.

mod client;
mod error;

pub use client::MatchClient;
pub use error::MatchError;
