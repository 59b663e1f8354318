//! A single player's showing in one match.

use crate::steam::MatchDetails;
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Fields of a match worth reporting back to a chat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPerformance {
    pub match_id: u64,
    pub account_id: String,
    pub hero_id: u32,
    /// Items list, from left to right, top to bottom
    pub item_list: Vec<u32>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub last_hits: u32,
    pub denies: u32,
    pub gpm: u32,
    pub xpm: u32,
    /// True if the player's team won
    pub win: bool,
    /// True if the player was on Radiant
    pub radiant: bool,
    pub game_mode: u8,
    pub hero_damage: u32,
    pub tower_damage: u32,
    pub hero_healing: u32,
    pub level: u32,
    pub dire_score: u32,
    pub radiant_score: u32,
    pub start_time: Option<DateTime<Utc>>,
}

impl PlayerPerformance {
    /// Pick `account_id` out of a match. `None` if they did not play in it
    /// or hid their profile.
    pub fn from_details(details: &MatchDetails, account_id: u32) -> Option<Self> {
        let player = details
            .players
            .iter()
            .find(|p| p.account_id == Some(account_id))?;

        let radiant = player.is_radiant();

        Some(Self {
            match_id: details.match_id,
            account_id: account_id.to_string(),
            hero_id: player.hero_id,
            item_list: player.items(),
            kills: player.kills,
            deaths: player.deaths,
            assists: player.assists,
            last_hits: player.last_hits,
            denies: player.denies,
            gpm: player.gold_per_min,
            xpm: player.xp_per_min,
            win: radiant == details.radiant_win,
            radiant,
            game_mode: details.game_mode,
            hero_damage: player.hero_damage,
            tower_damage: player.tower_damage,
            hero_healing: player.hero_healing,
            level: player.level,
            dire_score: details.dire_score,
            radiant_score: details.radiant_score,
            start_time: Utc.timestamp_opt(details.start_time, 0).single(),
        })
    }
}
