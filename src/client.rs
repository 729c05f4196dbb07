//! Client for the OpenFront public statistics API.
//!
//! # Example
//!
//! ```no_run
//! use openfront_client_sdk::client::Client;
//! use openfront_client_sdk::types::request::GamesRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! // List games that started on New Year's Day
//! let request = GamesRequest::builder()
//!     .start("2024-01-01T00:00:00.000Z")
//!     .end("2024-01-02T00:00:00.000Z")
//!     .limit(10)
//!     .build();
//!
//! let games = client.games(&request).await?;
//! println!("{} of {} games", games.items.len(), games.total);
//! # Ok(())
//! # }
//! ```

use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::Error;
use crate::types::request::{
    ClanSessionsRequest, ClanStatsRequest, GameRequest, GamesRequest, PlayerRequest,
    PlayerSessionsRequest,
};
use crate::types::response::{
    ClanLeaderboardEntry, ClanSession, ClanStats, ContentRange, Game, PageRange, PaginatedGames,
    PlayerProfile, PlayerSession,
};
use crate::{Result, ToQueryParams as _, bigint, serde_helpers};

/// HTTP client for the OpenFront public statistics API.
///
/// Provides one method per endpoint: games listing and detail, player
/// profiles and sessions, clan leaderboard, stats and sessions. The API is
/// public and unauthenticated; no credentials are sent.
///
/// Every method performs exactly one GET exchange with no retry, caching or
/// timeout. Each call owns its request/response lifecycle, so concurrent
/// calls on a shared client never interfere.
///
/// # API Base URL
///
/// The default endpoint is `https://api.openfront.io`.
///
/// # Example
///
/// ```no_run
/// use openfront_client_sdk::client::Client;
///
/// // Create client with the default endpoint
/// let client = Client::default();
///
/// // Or with a custom endpoint
/// let client = Client::new("https://stats.example.com").unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
}

impl Default for Client {
    fn default() -> Self {
        Client::new("https://api.openfront.io")
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a new API client with a custom host URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(host: &str) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("User-Agent", HeaderValue::from_static("openfront-client-sdk"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host: Url::parse(host)?,
            client,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    async fn get_value<Req: Serialize>(
        &self,
        path: &str,
        req: &Req,
    ) -> Result<(Value, HeaderMap)> {
        let query = req.query_params();
        let request = self
            .client
            .request(Method::GET, format!("{}{path}{query}", self.host))
            .build()?;
        crate::request_value(&self.client, request).await
    }

    async fn get<Req: Serialize, Res: DeserializeOwned>(
        &self,
        path: &str,
        req: &Req,
    ) -> Result<Res> {
        let (value, _headers) = self.get_value(path, req).await?;
        serde_helpers::deserialize_with_warnings(value)
    }

    async fn get_normalized<Req: Serialize, Res: DeserializeOwned>(
        &self,
        path: &str,
        req: &Req,
        use_big_int: bool,
    ) -> Result<Res> {
        let (value, _headers) = self.get_value(path, req).await?;
        let value = if use_big_int {
            bigint::normalize(value)
        } else {
            value
        };
        serde_helpers::deserialize_with_warnings(value)
    }

    /// Lists games that started within the requested time range.
    ///
    /// The response is paginated server-side; the covered window and overall
    /// total are parsed from the `content-range` header and returned alongside
    /// the items. A missing or malformed header yields a zero-filled range
    /// rather than an error.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any network call when `start` or
    /// `end` is empty, and the usual transport/status/decode errors otherwise.
    pub async fn games(&self, request: &GamesRequest) -> Result<PaginatedGames> {
        if request.start.is_empty() || request.end.is_empty() {
            return Err(Error::validation("start and end timestamps are required"));
        }

        let (value, headers) = self.get_value("public/games", request).await?;
        let items = serde_helpers::deserialize_with_warnings(value)?;

        let range = headers
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(ContentRange::parse)
            .unwrap_or_default();

        Ok(PaginatedGames {
            items,
            total: range.total,
            range: PageRange {
                start: range.start,
                end: range.end,
            },
        })
    }

    /// Retrieves the full record of one game.
    ///
    /// Turn history is included unless the request set `include_turns` to
    /// `false`. When `use_big_int` is set, decimal-digit strings in the
    /// response are upgraded to exact arbitrary-precision numbers (see
    /// [`crate::bigint::normalize`]).
    ///
    /// # Errors
    ///
    /// Returns a validation error when the game id is empty, and the usual
    /// transport/status/decode errors otherwise.
    pub async fn game(&self, request: &GameRequest) -> Result<Game> {
        if request.game_id.is_empty() {
            return Err(Error::validation("game id is required"));
        }

        self.get_normalized(
            &format!("public/game/{}", request.game_id),
            request,
            request.use_big_int,
        )
        .await
    }

    /// Retrieves profile and ranking information for one player.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the player id is empty, and the usual
    /// transport/status/decode errors otherwise.
    pub async fn player(&self, request: &PlayerRequest) -> Result<PlayerProfile> {
        if request.player_id.is_empty() {
            return Err(Error::validation("player id is required"));
        }

        self.get_normalized(
            &format!("public/player/{}", request.player_id),
            request,
            request.use_big_int,
        )
        .await
    }

    /// Retrieves the games and session (client) ids of one player, in the
    /// order the server returns them.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the player id is empty, and the usual
    /// transport/status/decode errors otherwise.
    pub async fn player_sessions(
        &self,
        request: &PlayerSessionsRequest,
    ) -> Result<Vec<PlayerSession>> {
        if request.player_id.is_empty() {
            return Err(Error::validation("player id is required"));
        }

        self.get_normalized(
            &format!("public/player/{}/sessions", request.player_id),
            request,
            request.use_big_int,
        )
        .await
    }

    /// Retrieves the top clans ranked by weighted wins, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn clan_leaderboard(&self) -> Result<Vec<ClanLeaderboardEntry>> {
        self.get("public/clans/leaderboard", &()).await
    }

    /// Retrieves aggregate performance statistics for one clan.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the clan tag is empty, and the usual
    /// transport/status/decode errors otherwise.
    pub async fn clan_stats(&self, request: &ClanStatsRequest) -> Result<ClanStats> {
        if request.clan_tag.is_empty() {
            return Err(Error::validation("clan tag is required"));
        }

        self.get(&format!("public/clan/{}", request.clan_tag), request)
            .await
    }

    /// Retrieves the session records of one clan, in server order.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the clan tag is empty, and the usual
    /// transport/status/decode errors otherwise.
    pub async fn clan_sessions(&self, request: &ClanSessionsRequest) -> Result<Vec<ClanSession>> {
        if request.clan_tag.is_empty() {
            return Err(Error::validation("clan tag is required"));
        }

        self.get(
            &format!("public/clan/{}/sessions", request.clan_tag),
            request,
        )
        .await
    }
}
