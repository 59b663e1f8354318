//! Steam Web API response types (Dota 2 endpoints).

use serde::{Deserialize, Serialize};

/// `result.status` value for a successful history lookup.
pub const HISTORY_STATUS_OK: i32 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEnvelope {
    pub result: MatchHistory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchHistory {
    #[serde(default = "default_history_status")]
    pub status: i32,
    #[serde(rename = "statusDetail", default)]
    pub status_detail: Option<String>,
    #[serde(default)]
    pub matches: Vec<MatchSummary>,
}

fn default_history_status() -> i32 {
    HISTORY_STATUS_OK
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchSummary {
    pub match_id: u64,
    #[serde(default)]
    pub start_time: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailsEnvelope {
    pub result: MatchDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchDetails {
    pub match_id: u64,
    #[serde(default)]
    pub radiant_win: bool,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub game_mode: u8,
    #[serde(default)]
    pub radiant_score: u32,
    #[serde(default)]
    pub dire_score: u32,
    #[serde(default)]
    pub players: Vec<PlayerDetail>,
}

/// One slot of a match. Anonymous players report account id 4294967295.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerDetail {
    pub account_id: Option<u32>,
    pub player_slot: u8,
    pub hero_id: u32,
    pub item_0: u32,
    pub item_1: u32,
    pub item_2: u32,
    pub item_3: u32,
    pub item_4: u32,
    pub item_5: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub last_hits: u32,
    pub denies: u32,
    pub gold_per_min: u32,
    pub xp_per_min: u32,
    pub hero_damage: u32,
    pub tower_damage: u32,
    pub hero_healing: u32,
    pub level: u32,
}

impl PlayerDetail {
    /// Slots 0-4 are Radiant; Dire slots have the high bit set.
    pub fn is_radiant(&self) -> bool {
        self.player_slot < 128
    }

    /// Inventory from left to right, top to bottom.
    pub fn items(&self) -> Vec<u32> {
        vec![
            self.item_0,
            self.item_1,
            self.item_2,
            self.item_3,
            self.item_4,
            self.item_5,
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroesEnvelope {
    pub result: HeroList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroList {
    #[serde(default)]
    pub heroes: Vec<Hero>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}
