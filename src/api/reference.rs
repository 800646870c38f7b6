//! Client for the community statistics API (`https://api.blaseball-reference.com/v1`)

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::fetch_utils::{build_url, fetch_json};
use super::http_client::create_http_client;
use super::params::{Ids, QueryParams, non_empty, zero_based};
use super::stats::{PlayerType, SortOrder, StatCategory};
use crate::config::ClientConfig;
use crate::config::validation::parse_base_url;
use crate::constants::{DEFAULT_LEADERS_LIMIT, reference as paths};
use crate::error::BlaseballError;

/// Parameters for [`ReferenceClient::get_season_leaders`].
///
/// `category`, `stat` and `order` are plain strings so callers can forward
/// user input; they are validated (case-insensitively) when the request is
/// built, before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonLeadersQuery {
    /// 1-based season number
    pub season: u32,
    pub category: String,
    pub stat: String,
    /// `ASC` or `DESC`, defaults to `DESC`
    pub order: String,
    /// Not range-checked, defaults to 10
    pub limit: u32,
}

impl SeasonLeadersQuery {
    pub fn new(season: u32, category: impl Into<String>, stat: impl Into<String>) -> Self {
        SeasonLeadersQuery {
            season,
            category: category.into(),
            stat: stat.into(),
            order: SortOrder::default().as_str().to_string(),
            limit: DEFAULT_LEADERS_LIMIT,
        }
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Validates category, then stat within that category, then order.
    pub(crate) fn to_params(&self) -> Result<QueryParams, BlaseballError> {
        let category: StatCategory = self.category.parse()?;
        let stat = category.validate_stat(&self.stat)?;
        let order: SortOrder = self.order.parse()?;
        let season = zero_based("season", self.season)?;

        Ok(QueryParams::new()
            .with("season", season)
            .with("category", category)
            .with("stat", stat)
            .with("order", order)
            .with("limit", self.limit))
    }
}

/// Player lookup for [`ReferenceClient::get_player_info`].
///
/// At least one field must be set. When several are, only the first in the
/// order `player_id`, `name`, `slug` is sent. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerInfoQuery {
    pub player_id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl PlayerInfoQuery {
    pub fn by_id(player_id: impl Into<String>) -> Self {
        PlayerInfoQuery {
            player_id: Some(player_id.into()),
            ..Default::default()
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        PlayerInfoQuery {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_slug(slug: impl Into<String>) -> Self {
        PlayerInfoQuery {
            slug: Some(slug.into()),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Result<QueryParams, BlaseballError> {
        let selected = if let Some(player_id) = non_empty(self.player_id.as_deref()) {
            ("playerId", player_id)
        } else if let Some(name) = non_empty(self.name.as_deref()) {
            ("name", name)
        } else if let Some(slug) = non_empty(self.slug.as_deref()) {
            ("slug", slug)
        } else {
            return Err(BlaseballError::invalid_argument(
                "Must specify one of ['player_id', 'name', 'slug']",
            ));
        };

        Ok(QueryParams::new().with(selected.0, selected.1))
    }
}

/// Team lookup for [`ReferenceClient::get_current_roster`].
/// Either field may be set; both are sent when both are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterQuery {
    pub team_id: Option<String>,
    pub slug: Option<String>,
}

impl RosterQuery {
    pub fn by_team_id(team_id: impl Into<String>) -> Self {
        RosterQuery {
            team_id: Some(team_id.into()),
            slug: None,
        }
    }

    pub fn by_slug(slug: impl Into<String>) -> Self {
        RosterQuery {
            team_id: None,
            slug: Some(slug.into()),
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub(crate) fn to_params(&self) -> Result<QueryParams, BlaseballError> {
        let team_id = non_empty(self.team_id.as_deref());
        let slug = non_empty(self.slug.as_deref());
        if team_id.is_none() && slug.is_none() {
            return Err(BlaseballError::invalid_argument(
                "Either team_id or slug must be set",
            ));
        }

        let mut params = QueryParams::new();
        params.push_opt("teamId", team_id);
        params.push_opt("slug", slug);
        Ok(params)
    }
}

/// Optional filters for [`ReferenceClient::get_game_events`].
/// Unset filters are omitted; the default query sends no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEventsQuery {
    pub game_id: Option<String>,
    pub pitcher_id: Option<String>,
    pub batter_id: Option<String>,
    pub event_type: Option<String>,
    /// 1-based season number
    pub season: Option<u32>,
    /// 1-based day number
    pub day: Option<u32>,
}

impl GameEventsQuery {
    pub fn game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = Some(game_id.into());
        self
    }

    pub fn pitcher_id(mut self, pitcher_id: impl Into<String>) -> Self {
        self.pitcher_id = Some(pitcher_id.into());
        self
    }

    pub fn batter_id(mut self, batter_id: impl Into<String>) -> Self {
        self.batter_id = Some(batter_id.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn season(mut self, season: u32) -> Self {
        self.season = Some(season);
        self
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    pub(crate) fn to_params(&self) -> Result<QueryParams, BlaseballError> {
        let mut params = QueryParams::new();
        params.push_opt("gameId", non_empty(self.game_id.as_deref()));
        params.push_opt("pitcherId", non_empty(self.pitcher_id.as_deref()));
        params.push_opt("batterId", non_empty(self.batter_id.as_deref()));
        params.push_opt("type", non_empty(self.event_type.as_deref()));
        params.push_opt(
            "season",
            self.season.map(|s| zero_based("season", s)).transpose()?,
        );
        params.push_opt("day", self.day.map(|d| zero_based("day", d)).transpose()?);
        Ok(params)
    }
}

fn count_by_type_params(
    event_type: &str,
    player_type: &str,
    player_id: &str,
) -> Result<QueryParams, BlaseballError> {
    let player_type: PlayerType = player_type.parse()?;
    Ok(QueryParams::new()
        .with("eventType", event_type)
        .with(player_type.id_param(), player_id))
}

fn player_stats_params(
    category: &str,
    player_ids: Ids,
    season: Option<u32>,
) -> Result<QueryParams, BlaseballError> {
    let category: StatCategory = category.parse()?;
    let mut params = QueryParams::new()
        .with("category", category)
        .with("playerIds", player_ids.joined());
    params.push_opt("season", season.map(|s| zero_based("season", s)).transpose()?);
    Ok(params)
}

/// Typed access to the Blaseball Reference statistics API.
///
/// Same contract as [`crate::PrimaryClient`]: one GET per call, decoded JSON
/// returned verbatim, 1-based seasons and days sent 0-based. Guarded
/// operations validate their enumerated inputs and fail with
/// `InvalidArgument` before any request is made.
#[derive(Debug, Clone)]
pub struct ReferenceClient {
    client: Client,
    base_url: Url,
    request_timeout: Option<Duration>,
}

impl ReferenceClient {
    /// Client against the public API; no custom headers are sent.
    pub fn new() -> Result<Self, BlaseballError> {
        Self::with_config(ClientConfig::reference())
    }

    /// Client built from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, BlaseballError> {
        config.validate()?;
        let base_url = parse_base_url(&config.base_url)?;
        let client = create_http_client(&config)?;
        let request_timeout = config.request_timeout();
        debug!("Created reference API client for {base_url}");
        Ok(ReferenceClient {
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

    // Raw data

    /// Every raw game event recorded for a season.
    pub async fn get_raw_data(&self, season: u32) -> Result<Value, BlaseballError> {
        let params = QueryParams::new().with("season", zero_based("season", season)?);
        self.get(paths::RAW_EVENTS, params).await
    }

    // Game events

    /// Queries game events, optionally filtered.
    pub async fn get_game_events(
        &self,
        query: &GameEventsQuery,
    ) -> Result<Value, BlaseballError> {
        self.get(paths::EVENTS, query.to_params()?).await
    }

    /// Counts events of `event_type` for one batter or pitcher.
    ///
    /// `player_type` must be `batter` or `pitcher` (any case); the id is sent
    /// as `batterId` or `pitcherId` accordingly.
    pub async fn count_by_type(
        &self,
        event_type: &str,
        player_type: &str,
        player_id: &str,
    ) -> Result<Value, BlaseballError> {
        let params = count_by_type_params(event_type, player_type, player_id)?;
        self.get(paths::COUNT_BY_TYPE, params).await
    }

    // Players

    pub async fn list_deceased_players(&self) -> Result<Value, BlaseballError> {
        self.get(paths::DECEASED, QueryParams::new()).await
    }

    /// Player ids whose name matches `name`; `current` limits to active players.
    pub async fn list_player_ids_by_name(
        &self,
        name: &str,
        current: bool,
    ) -> Result<Value, BlaseballError> {
        let params = QueryParams::new()
            .with("name", name)
            .with("current", current);
        self.get(paths::PLAYER_IDS_BY_NAME, params).await
    }

    /// Extended info for one player: name, attributes, ratings and stars.
    pub async fn get_player_info(
        &self,
        query: &PlayerInfoQuery,
    ) -> Result<Value, BlaseballError> {
        self.get(paths::PLAYER_INFO, query.to_params()?).await
    }

    /// Players carrying a modification tag.
    pub async fn list_tagged_players(&self) -> Result<Value, BlaseballError> {
        self.get(paths::TAGGED_PLAYERS, QueryParams::new()).await
    }

    pub async fn list_all_players(&self, include_shadows: bool) -> Result<Value, BlaseballError> {
        let params = QueryParams::new().with("includeShadows", include_shadows);
        self.get(paths::ALL_PLAYERS, params).await
    }

    /// Every player as of a given season and day.
    pub async fn list_all_players_for_gameday(
        &self,
        season: u32,
        day: u32,
    ) -> Result<Value, BlaseballError> {
        let params = QueryParams::new()
            .with("season", zero_based("season", season)?)
            .with("day", zero_based("day", day)?);
        self.get(paths::ALL_PLAYERS_FOR_GAMEDAY, params).await
    }

    // Teams

    pub async fn get_current_roster(&self, query: &RosterQuery) -> Result<Value, BlaseballError> {
        self.get(paths::CURRENT_ROSTER, query.to_params()?).await
    }

    pub async fn list_all_teams(&self) -> Result<Value, BlaseballError> {
        self.get(paths::ALL_TEAMS, QueryParams::new()).await
    }

    pub async fn list_team_stars(&self) -> Result<Value, BlaseballError> {
        self.get(paths::ALL_TEAM_STARS, QueryParams::new()).await
    }

    // Statistics

    /// Season leaders for one category and stat.
    pub async fn get_season_leaders(
        &self,
        query: &SeasonLeadersQuery,
    ) -> Result<Value, BlaseballError> {
        self.get(paths::SEASON_LEADERS, query.to_params()?).await
    }

    /// Stats in one category for one or more players; `season` of `None`
    /// omits the parameter entirely.
    pub async fn get_player_stats(
        &self,
        category: &str,
        player_ids: impl Into<Ids>,
        season: Option<u32>,
    ) -> Result<Value, BlaseballError> {
        let params = player_stats_params(category, player_ids.into(), season)?;
        self.get(paths::PLAYER_STATS, params).await
    }
}

impl fmt::Display for ReferenceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReferenceClient")
    }
}
