#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::types::GameType;

/// Parameters for listing games within a time range.
///
/// `start` and `end` are mandatory and forwarded verbatim as query
/// parameters; the server interprets them as timestamps. The remaining
/// filters pass through unvalidated.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct GamesRequest {
    #[builder(into)]
    pub start: String,
    #[builder(into)]
    pub end: String,
    #[serde(rename = "type")]
    pub game_type: Option<GameType>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Parameters for fetching one game's detail record.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct GameRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub game_id: String,
    /// The server includes turn history by default; `turns=false` is emitted
    /// only when this is explicitly `Some(false)`.
    #[serde(rename = "turns", skip_serializing_if = "turns_included")]
    pub include_turns: Option<bool>,
    /// Run big-integer normalization over the decoded response.
    #[serde(skip_serializing)]
    #[builder(default)]
    pub use_big_int: bool,
}

fn turns_included(include: &Option<bool>) -> bool {
    *include != Some(false)
}

/// Parameters for fetching a player profile.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PlayerRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub player_id: String,
    /// Run big-integer normalization over the decoded response.
    #[serde(skip_serializing)]
    #[builder(default)]
    pub use_big_int: bool,
}

/// Parameters for fetching a player's session records.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct PlayerSessionsRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub player_id: String,
    /// Run big-integer normalization over the decoded response.
    #[serde(skip_serializing)]
    #[builder(default)]
    pub use_big_int: bool,
}

/// Parameters for fetching clan statistics.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ClanStatsRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub clan_tag: String,
    #[builder(into)]
    pub start: Option<String>,
    #[builder(into)]
    pub end: Option<String>,
    pub limit: Option<u32>,
}

/// Parameters for fetching clan session records.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ClanSessionsRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub clan_tag: String,
    #[builder(into)]
    pub start: Option<String>,
    #[builder(into)]
    pub end: Option<String>,
    pub limit: Option<u32>,
}
