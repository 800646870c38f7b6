//! Client for the primary simulation API (`https://www.blaseball.com`)

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::fetch_utils::{build_url, build_url_with_id, fetch_json};
use super::http_client::create_http_client;
use super::params::{Ids, QueryParams, zero_based};
use super::stream::{DataStream, open_stream};
use crate::config::ClientConfig;
use crate::config::validation::parse_base_url;
use crate::constants::primary as paths;
use crate::error::BlaseballError;

/// Typed access to the simulation/database API.
///
/// Every method issues exactly one GET and returns the decoded JSON body
/// verbatim. Season and day arguments are 1-based and sent 0-based.
/// Identifier arguments accept a single id or any list of ids (see [`Ids`]).
///
/// The client is cheap to clone and safe to share between tasks; clones
/// reuse the same connection pool.
///
/// ```rust,no_run
/// use blaser::PrimaryClient;
///
/// # async fn example() -> blaser::Result<()> {
/// let client = PrimaryClient::new()?;
/// let games = client.get_game_by_date(8, 44).await?; // GET /database/games?day=43&season=7
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PrimaryClient {
    client: Client,
    base_url: Url,
    request_timeout: Option<Duration>,
}

impl PrimaryClient {
    /// Client against the public API with the default headers.
    pub fn new() -> Result<Self, BlaseballError> {
        Self::with_config(ClientConfig::primary())
    }

    /// Client built from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, BlaseballError> {
        config.validate()?;
        let base_url = parse_base_url(&config.base_url)?;
        let client = create_http_client(&config)?;
        let request_timeout = config.request_timeout();
        debug!("Created primary API client for {base_url}");
        Ok(PrimaryClient {
            client,
            base_url,
            request_timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get(&self, path: &str, params: QueryParams) -> Result<Value, BlaseballError> {
        let url = build_url(&self.base_url, path);
        fetch_json(&self.client, url, &params, self.request_timeout).await
    }

    async fn get_by_id(&self, path: &str, id: &str) -> Result<Value, BlaseballError> {
        self.get(path, QueryParams::new().with("id", id)).await
    }

    async fn get_by_ids(&self, path: &str, ids: Ids) -> Result<Value, BlaseballError> {
        self.get(path, QueryParams::new().with("ids", ids.joined()))
            .await
    }

    // Live data

    /// Subscribes to the live event stream (`database/streamData`).
    ///
    /// See [`DataStream`] for the item and termination semantics.
    pub async fn stream_data(&self) -> Result<DataStream, BlaseballError> {
        open_stream(&self.client, &self.base_url, paths::STREAM_DATA).await
    }

    // Objects

    /// Gets information for a league given its ID.
    pub async fn get_league_info(&self, league_id: &str) -> Result<Value, BlaseballError> {
        self.get_by_id(paths::LEAGUE, league_id).await
    }

    /// Gets information for a subleague given its ID.
    pub async fn get_subleague_info(&self, subleague_id: &str) -> Result<Value, BlaseballError> {
        self.get_by_id(paths::SUBLEAGUE, subleague_id).await
    }

    /// Gets information for a division given its ID.
    pub async fn get_division_info(&self, division_id: &str) -> Result<Value, BlaseballError> {
        self.get_by_id(paths::DIVISION, division_id).await
    }

    /// Gets information for a team given its ID.
    pub async fn get_team_info(&self, team_id: &str) -> Result<Value, BlaseballError> {
        self.get_by_id(paths::TEAM, team_id).await
    }

    /// Gets information for one or more players.
    pub async fn get_player_info(
        &self,
        player_ids: impl Into<Ids>,
    ) -> Result<Value, BlaseballError> {
        self.get_by_ids(paths::PLAYERS, player_ids.into()).await
    }

    /// Gets information for a season.
    pub async fn get_season_info(&self, season: u32) -> Result<Value, BlaseballError> {
        let params = QueryParams::new().with("number", zero_based("season", season)?);
        self.get(paths::SEASON, params).await
    }

    /// Gets the last update of every game on the given season and day.
    ///
    /// Completed games show their final update, running games the present
    /// state, and scheduled games a placeholder update.
    pub async fn get_game_by_date(&self, season: u32, day: u32) -> Result<Value, BlaseballError> {
        let params = QueryParams::new()
            .with("day", zero_based("day", day)?)
            .with("season", zero_based("season", season)?);
        self.get(paths::GAMES, params).await
    }

    /// Gets the last update of a game given its ID.
    pub async fn get_game_by_id(&self, game_id: &str) -> Result<Value, BlaseballError> {
        let url = build_url_with_id(&self.base_url, paths::GAME_BY_ID, game_id);
        fetch_json(&self.client, url, &QueryParams::new(), self.request_timeout).await
    }

    /// Gets playoff details for a season.
    pub async fn get_playoff_details(&self, season: u32) -> Result<Value, BlaseballError> {
        let params = QueryParams::new().with("number", zero_based("season", season)?);
        self.get(paths::PLAYOFFS, params).await
    }

    /// Gets one playoff round given its ID.
    pub async fn get_playoff_round_details(
        &self,
        round_id: &str,
    ) -> Result<Value, BlaseballError> {
        self.get_by_id(paths::PLAYOFF_ROUND, round_id).await
    }

    /// Gets one or more playoff matchups.
    pub async fn get_playoff_matchups(
        &self,
        matchup_ids: impl Into<Ids>,
    ) -> Result<Value, BlaseballError> {
        self.get_by_ids(paths::PLAYOFF_MATCHUPS, matchup_ids.into())
            .await
    }

    /// Current simulation state (day, season, time to next cycle, ...).
    pub async fn get_simulation_data(&self) -> Result<Value, BlaseballError> {
        self.get(paths::SIMULATION_DATA, QueryParams::new()).await
    }

    pub async fn list_idol_leaderboard(&self) -> Result<Value, BlaseballError> {
        self.get(paths::IDOLS, QueryParams::new()).await
    }

    /// Players in the hall of flame with their peanut counts.
    pub async fn list_hall_of_flame(&self) -> Result<Value, BlaseballError> {
        self.get(paths::TRIBUTE, QueryParams::new()).await
    }

    // Summaries

    /// Every division with its member teams.
    pub async fn list_all_divisions(&self) -> Result<Value, BlaseballError> {
        self.get(paths::ALL_DIVISIONS, QueryParams::new()).await
    }

    pub async fn list_all_teams(&self) -> Result<Value, BlaseballError> {
        self.get(paths::ALL_TEAMS, QueryParams::new()).await
    }

    /// Messages shown in the ticker.
    pub async fn list_global_events(&self) -> Result<Value, BlaseballError> {
        self.get(paths::GLOBAL_EVENTS, QueryParams::new()).await
    }

    /// Gets the standings object referenced by a season.
    pub async fn get_standings(&self, standings_id: &str) -> Result<Value, BlaseballError> {
        self.get_by_id(paths::STANDINGS, standings_id).await
    }

    pub async fn get_tiebreakers(&self, tiebreakers_id: &str) -> Result<Value, BlaseballError> {
        self.get_by_id(paths::TIEBREAKERS, tiebreakers_id).await
    }

    // Elections

    /// Gets results for one or more blessings.
    pub async fn get_blessing_results(
        &self,
        blessing_ids: impl Into<Ids>,
    ) -> Result<Value, BlaseballError> {
        self.get_by_ids(paths::BONUS_RESULTS, blessing_ids.into())
            .await
    }

    /// Gets results for one or more decrees.
    pub async fn get_decree_results(
        &self,
        decree_ids: impl Into<Ids>,
    ) -> Result<Value, BlaseballError> {
        self.get_by_ids(paths::DECREE_RESULTS, decree_ids.into())
            .await
    }

    /// Decrees and blessings passed at the end of a season.
    pub async fn get_election_recap(&self, season: u32) -> Result<Value, BlaseballError> {
        let params = QueryParams::new().with("season", zero_based("season", season)?);
        self.get(paths::OFFSEASON_RECAP, params).await
    }

    /// Decrees and blessings on the ballot for the current season.
    pub async fn list_election_details(&self) -> Result<Value, BlaseballError> {
        self.get(paths::OFFSEASON_SETUP, QueryParams::new()).await
    }

    // Statsheets

    pub async fn get_season_statsheets(
        &self,
        season_ids: impl Into<Ids>,
    ) -> Result<Value, BlaseballError> {
        self.get_by_ids(paths::SEASON_STAT_SHEETS, season_ids.into())
            .await
    }

    pub async fn get_game_statsheets(
        &self,
        game_ids: impl Into<Ids>,
    ) -> Result<Value, BlaseballError> {
        self.get_by_ids(paths::GAME_STAT_SHEETS, game_ids.into())
            .await
    }

    /// Team statsheets belong to a single game.
    pub async fn get_team_statsheets(
        &self,
        team_statsheet_ids: impl Into<Ids>,
    ) -> Result<Value, BlaseballError> {
        self.get_by_ids(paths::TEAM_STAT_SHEETS, team_statsheet_ids.into())
            .await
    }

    /// Player statsheets belong to a single game.
    pub async fn get_player_statsheets(
        &self,
        player_statsheet_ids: impl Into<Ids>,
    ) -> Result<Value, BlaseballError> {
        self.get_by_ids(paths::PLAYER_SEASON_STATS, player_statsheet_ids.into())
            .await
    }
}

impl fmt::Display for PrimaryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrimaryClient")
    }
}
