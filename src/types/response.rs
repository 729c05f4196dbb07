#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use serde_with::serde_as;

use crate::serde_helpers::StringFromAny;
use crate::types::{GameType, MaybeBigInt};

/// One entry of the games listing.
///
/// The listing carries only basic metadata; fetch the full record with
/// [`crate::client::Client::game`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GameSummary {
    pub game: String,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(rename = "type")]
    pub game_type: Option<GameType>,
    pub mode: Option<String>,
    pub difficulty: Option<String>,
}

/// The window of the full result set covered by one listing response,
/// parsed from a `content-range: games <start>-<end>/<total>` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ContentRange {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl ContentRange {
    /// Parses a `games <start>-<end>/<total>` header value.
    ///
    /// Returns `None` when the value does not match; callers fall back to the
    /// zero-filled default, a missing or malformed header is non-fatal.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let rest = value.trim().strip_prefix("games ")?;
        let (range, total) = rest.split_once('/')?;
        let (start, end) = range.split_once('-')?;

        Some(Self {
            start: start.parse().ok()?,
            end: end.parse().ok()?,
            total: total.parse().ok()?,
        })
    }
}

/// The `start`/`end` window of a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PageRange {
    pub start: u64,
    pub end: u64,
}

/// A games listing together with its pagination window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PaginatedGames {
    pub items: Vec<GameSummary>,
    pub total: u64,
    pub range: PageRange,
}

/// The full record of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Game {
    pub version: Option<String>,
    pub git_commit: Option<String>,
    pub domain: Option<String>,
    pub subdomain: Option<String>,
    pub info: Option<GameMetadata>,
    /// Absent when the request suppressed turn history with `turns=false`.
    #[serde(default)]
    pub turns: Option<Vec<GameTurn>>,
}

/// Lobby metadata and per-player results of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct GameMetadata {
    #[serde(rename = "gameID")]
    pub game_id: Option<String>,
    pub config: Option<GameConfig>,
    #[serde(default)]
    pub players: Vec<GamePlayer>,
    pub lobby_created_at: Option<i64>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub duration: Option<i64>,
    #[serde(rename = "num_turns")]
    pub num_turns: Option<u64>,
    /// `["player", <client id>]` when the game had a winner.
    pub winner: Option<(String, String)>,
    pub lobby_fill_time: Option<i64>,
}

/// Lobby configuration of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct GameConfig {
    pub game_map: Option<String>,
    pub difficulty: Option<String>,
    pub donate_gold: Option<bool>,
    pub donate_troops: Option<bool>,
    pub game_type: Option<String>,
    pub game_mode: Option<String>,
    pub game_map_size: Option<String>,
    #[serde(rename = "disableNPCs")]
    pub disable_npcs: Option<bool>,
    pub bots: Option<u32>,
    pub infinite_gold: Option<bool>,
    pub infinite_troops: Option<bool>,
    pub instant_build: Option<bool>,
    #[serde(default)]
    pub disabled_units: Vec<String>,
    pub player_teams: Option<u32>,
    pub random_spawn: Option<bool>,
}

/// One participant of a game, with their end-of-game stat counters.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct GamePlayer {
    #[serde_as(as = "StringFromAny")]
    #[serde(rename = "clientID")]
    pub client_id: String,
    pub username: Option<String>,
    pub cosmetics: Option<PlayerCosmetics>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(rename = "persistentID", default)]
    pub persistent_id: Option<String>,
    pub stats: Option<PlayerStats>,
}

/// Cosmetic selections of a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerCosmetics {
    pub flag: Option<String>,
}

/// Per-player stat counters.
///
/// The API encodes these as decimal strings because the underlying counters
/// can exceed 2^53; they land as [`MaybeBigInt`] so the opt-in big-integer
/// normalization is observable (see [`crate::bigint::normalize`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerStats {
    #[serde(default)]
    pub attacks: Vec<MaybeBigInt>,
    pub conquests: Option<MaybeBigInt>,
    pub boats: Option<PlayerBoats>,
    pub bombs: Option<PlayerBombs>,
    #[serde(default)]
    pub gold: Vec<MaybeBigInt>,
    pub units: Option<PlayerUnits>,
}

/// Boat counters, split by trade and transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerBoats {
    #[serde(default)]
    pub trade: Vec<MaybeBigInt>,
    #[serde(default)]
    pub trans: Vec<MaybeBigInt>,
}

/// Bomb counters, split by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerBombs {
    #[serde(default)]
    pub abomb: Vec<MaybeBigInt>,
    #[serde(default)]
    pub hbomb: Vec<MaybeBigInt>,
}

/// Structure counters, keyed by the API's short unit codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerUnits {
    #[serde(default)]
    pub city: Vec<MaybeBigInt>,
    #[serde(default)]
    pub port: Vec<MaybeBigInt>,
    /// SAM launchers.
    #[serde(default)]
    pub saml: Vec<MaybeBigInt>,
    /// Missile silos.
    #[serde(default)]
    pub silo: Vec<MaybeBigInt>,
    /// Factories.
    #[serde(default)]
    pub fact: Vec<MaybeBigInt>,
    /// Defense posts.
    #[serde(default)]
    pub defp: Vec<MaybeBigInt>,
    /// Warships.
    #[serde(default)]
    pub wshp: Vec<MaybeBigInt>,
}

/// One turn of a game's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct GameTurn {
    pub turn_number: Option<u64>,
    #[serde(default)]
    pub intents: Vec<TurnIntent>,
    pub hash: Option<Number>,
}

/// One player intent within a turn.
///
/// Intent kinds the client does not know yet decode as [`TurnIntent::Other`]
/// rather than failing the whole record.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[non_exhaustive]
pub enum TurnIntent {
    #[serde(rename = "spawn")]
    Spawn {
        #[serde_as(as = "StringFromAny")]
        #[serde(rename = "clientID")]
        client_id: String,
        /// Tiles are 1D indices into the map, not `[x, y]` pairs.
        tile: u64,
    },
    #[serde(rename = "attack")]
    Attack {
        #[serde_as(as = "StringFromAny")]
        #[serde(rename = "clientID")]
        client_id: String,
        #[serde_as(as = "Option<StringFromAny>")]
        #[serde(rename = "targetID", default)]
        target_id: Option<String>,
        troops: Option<f64>,
    },
    #[serde(rename = "boat")]
    Boat {
        #[serde_as(as = "StringFromAny")]
        #[serde(rename = "clientID")]
        client_id: String,
        #[serde_as(as = "Option<StringFromAny>")]
        #[serde(rename = "targetID", default)]
        target_id: Option<String>,
        troops: Option<f64>,
        dst: u64,
        #[serde(default)]
        src: Option<u64>,
    },
    #[serde(rename = "allianceRequest")]
    AllianceRequest {
        #[serde_as(as = "StringFromAny")]
        #[serde(rename = "clientID")]
        client_id: String,
        #[serde_as(as = "StringFromAny")]
        recipient: String,
    },
    #[serde(rename = "allianceExtension")]
    AllianceExtension {
        #[serde_as(as = "StringFromAny")]
        #[serde(rename = "clientID")]
        client_id: String,
        #[serde_as(as = "StringFromAny")]
        recipient: String,
    },
    #[serde(rename = "build_unit")]
    BuildUnit {
        #[serde_as(as = "StringFromAny")]
        #[serde(rename = "clientID")]
        client_id: String,
        unit: String,
        tile: u64,
    },
    #[serde(other)]
    Other,
}

/// A player profile with ranking information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PlayerProfile {
    /// Persistent player id; a decimal string unless the request asked for
    /// big-integer normalization.
    pub id: MaybeBigInt,
    pub name: Option<String>,
    pub elo: Option<PlayerElo>,
}

/// Elo rating state of a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PlayerElo {
    pub rating: Option<f64>,
    pub k_factor: Option<f64>,
}

/// One game a player took part in, with the session (client) id used.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PlayerSession {
    #[serde_as(as = "StringFromAny")]
    pub game_id: String,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub start: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(default)]
    pub end: Option<String>,
}

/// One row of the clan leaderboard, ordered by weighted wins descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ClanLeaderboardEntry {
    pub tag: String,
    pub name: Option<String>,
    pub score: Option<f64>,
}

/// Aggregate clan performance statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClanStats {
    pub total_games: Option<u64>,
    pub wins: Option<u64>,
    pub losses: Option<u64>,
    pub win_rate: Option<f64>,
    pub breakdown: Option<ClanStatsBreakdown>,
}

/// Clan statistics broken down by team composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClanStatsBreakdown {
    #[serde(default)]
    pub team_type: HashMap<String, ClanStatsDetail>,
    #[serde(default)]
    pub num_teams: HashMap<String, ClanStatsDetail>,
}

/// Win/loss detail for one breakdown bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClanStatsDetail {
    pub wins: Option<u64>,
    pub losses: Option<u64>,
    pub win_rate: Option<f64>,
    pub win_loss_ratio: Option<f64>,
    pub weighted_win_loss_ratio: Option<f64>,
}

/// One game a clan took part in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClanSession {
    pub total_player_count: Option<u64>,
    pub num_teams: Option<u64>,
    pub clan_player_count: Option<u64>,
    pub has_won: Option<bool>,
    pub timestamp: Option<String>,
}
