//! Library-wide constants: base URLs, header values and endpoint paths
//!
//! Every endpoint path lives here so each public client method is bound to a
//! fixed path at compile time.

/// Base URL of the primary simulation API
pub const PRIMARY_BASE_URL: &str = "https://www.blaseball.com";

/// Base URL of the community statistics reference API
pub const REFERENCE_BASE_URL: &str = "https://api.blaseball-reference.com/v1";

/// User agent sent by the primary client, e.g. `blaser/0.1.0`
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Maximum number of idle connections per host kept in a client's pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Number of characters of a response body echoed into debug logs
pub const RESPONSE_PREVIEW_CHARS: usize = 1024;

/// Separator used when an identifier list is sent as one query value
pub const ID_SEPARATOR: &str = ",";

/// Default row limit for season leader lookups
pub const DEFAULT_LEADERS_LIMIT: u32 = 10;

/// Primary API endpoint paths
pub mod primary {
    pub const LEAGUE: &str = "database/league";
    pub const SUBLEAGUE: &str = "database/subleague";
    pub const DIVISION: &str = "database/division";
    pub const TEAM: &str = "database/team";
    pub const PLAYERS: &str = "database/players";
    pub const SEASON: &str = "database/season";
    pub const GAMES: &str = "database/games";
    /// Prefix; the game id is appended as the final path segment
    pub const GAME_BY_ID: &str = "database/gameById";
    pub const PLAYOFFS: &str = "database/playoffs";
    pub const PLAYOFF_ROUND: &str = "database/playoffRound";
    pub const PLAYOFF_MATCHUPS: &str = "database/playoffMatchups";
    pub const SIMULATION_DATA: &str = "database/simulationData";
    pub const IDOLS: &str = "api/getIdols";
    pub const TRIBUTE: &str = "api/getTribute";
    pub const ALL_DIVISIONS: &str = "database/allDivisions";
    pub const ALL_TEAMS: &str = "database/allTeams";
    pub const GLOBAL_EVENTS: &str = "database/globalEvents";
    pub const STANDINGS: &str = "database/standings";
    pub const TIEBREAKERS: &str = "database/tiebreakers";
    pub const BONUS_RESULTS: &str = "database/bonusResults";
    pub const DECREE_RESULTS: &str = "database/decreeResults";
    pub const OFFSEASON_RECAP: &str = "database/offseasonRecap";
    pub const OFFSEASON_SETUP: &str = "database/offseasonSetup";
    pub const SEASON_STAT_SHEETS: &str = "database/seasonStatSheets";
    pub const GAME_STAT_SHEETS: &str = "database/gameStatSheets";
    pub const TEAM_STAT_SHEETS: &str = "database/teamStatSheets";
    pub const PLAYER_SEASON_STATS: &str = "database/playerSeasonStats";
    pub const STREAM_DATA: &str = "database/streamData";
}

/// Reference API endpoint paths
pub mod reference {
    pub const RAW_EVENTS: &str = "data/events";
    pub const EVENTS: &str = "events";
    pub const COUNT_BY_TYPE: &str = "countByType";
    pub const DECEASED: &str = "deceased";
    pub const PLAYER_IDS_BY_NAME: &str = "playerIdsByName";
    pub const PLAYER_INFO: &str = "playerInfo";
    pub const TAGGED_PLAYERS: &str = "taggedPlayers";
    pub const ALL_PLAYERS: &str = "allPlayers";
    pub const ALL_PLAYERS_FOR_GAMEDAY: &str = "allPlayersForGameday";
    pub const CURRENT_ROSTER: &str = "currentRoster";
    pub const ALL_TEAMS: &str = "allTeams";
    pub const ALL_TEAM_STARS: &str = "allTeamStars";
    pub const SEASON_LEADERS: &str = "seasonLeaders";
    pub const PLAYER_STATS: &str = "playerStats";
}

/// Environment variable names read by the optional logging helper
pub mod env_vars {
    /// Standard tracing filter override
    pub const LOG_FILTER: &str = "RUST_LOG";
}
