//! Match service - latest Dota 2 match record for a player.
//!
//! Serves `GET /match/latest?account_id=<id>` by chaining the Steam Web API's
//! match history and match details calls, then reducing the match to the
//! requested player's performance.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod performance;
pub mod steam;

pub use config::Config;
pub use error::ServiceError;
pub use performance::PlayerPerformance;
pub use steam::{SteamClient, SteamError};
