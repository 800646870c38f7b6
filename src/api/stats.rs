//! Closed value sets the reference API accepts, checked before any request

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::BlaseballError;

/// Category names in the order they are reported in error messages
pub const VALID_CATEGORIES: [&str; 4] = ["batting", "pitching", "fielding", "running"];

const BATTING_STATS: &[&str] = &[
    "batting_average",
    "on_base_percentage",
    "slugging",
    "plate_appearances",
    "at_bats",
    "hits",
    "walks",
    "singles",
    "doubles",
    "triples",
    "home_runs",
    "runs_batted_in",
    "strikeouts",
    "sacrifices",
    "at_bats_risp",
    "hits_risps",
    "batting_average_risp",
    "on_base_slugging",
    "total_bases",
    "hbps",
    "ground_outs",
    "flyouts",
    "gidps",
];

const PITCHING_STATS: &[&str] = &[
    "games",
    "pitch_count",
    "outs_recorded",
    "innings",
    "runs_allowed",
    "era",
    "strikeouts",
    "k_per_9",
    "walks",
    "hrs_allowed",
    "hits_allowed",
];

const FIELDING_STATS: &[&str] = &["plays"];

const RUNNING_STATS: &[&str] = &["stolen_bases", "caught_stealing", "runs"];

/// Valid stat names per category, built once per process.
pub static VALID_STATS: LazyLock<HashMap<StatCategory, &'static [&'static str]>> =
    LazyLock::new(|| {
        HashMap::from([
            (StatCategory::Batting, BATTING_STATS),
            (StatCategory::Pitching, PITCHING_STATS),
            (StatCategory::Fielding, FIELDING_STATS),
            (StatCategory::Running, RUNNING_STATS),
        ])
    });

/// Statistic category understood by `seasonLeaders` and `playerStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatCategory {
    Batting,
    Pitching,
    Fielding,
    Running,
}

impl StatCategory {
    /// Wire form, always lowercase
    pub fn as_str(self) -> &'static str {
        match self {
            StatCategory::Batting => "batting",
            StatCategory::Pitching => "pitching",
            StatCategory::Fielding => "fielding",
            StatCategory::Running => "running",
        }
    }

    /// Stat names registered for this category
    pub fn valid_stats(self) -> &'static [&'static str] {
        VALID_STATS.get(&self).copied().unwrap_or_default()
    }

    /// Validates `stat` against this category only, case-insensitively,
    /// and returns its lowercase wire form.
    pub fn validate_stat(self, stat: &str) -> Result<&'static str, BlaseballError> {
        let wanted = stat.to_ascii_lowercase();
        self.valid_stats()
            .iter()
            .copied()
            .find(|candidate| *candidate == wanted)
            .ok_or_else(|| {
                BlaseballError::invalid_argument(format!(
                    "'stat' must be one of {:?} for category '{}', got '{stat}'",
                    self.valid_stats(),
                    self.as_str()
                ))
            })
    }
}

impl FromStr for StatCategory {
    type Err = BlaseballError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "batting" => Ok(StatCategory::Batting),
            "pitching" => Ok(StatCategory::Pitching),
            "fielding" => Ok(StatCategory::Fielding),
            "running" => Ok(StatCategory::Running),
            _ => Err(BlaseballError::invalid_argument(format!(
                "'category' must be one of {VALID_CATEGORIES:?}, got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering for season leader lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire form, always uppercase
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = BlaseballError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(BlaseballError::invalid_argument(format!(
                "'order' must be one of [\"ASC\", \"DESC\"], got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a plate appearance an event count is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    Batter,
    Pitcher,
}

impl PlayerType {
    /// Query parameter carrying the player id for this type
    pub fn id_param(self) -> &'static str {
        match self {
            PlayerType::Batter => "batterId",
            PlayerType::Pitcher => "pitcherId",
        }
    }
}

impl FromStr for PlayerType {
    type Err = BlaseballError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "batter" => Ok(PlayerType::Batter),
            "pitcher" => Ok(PlayerType::Pitcher),
            _ => Err(BlaseballError::invalid_argument(format!(
                "'player_type' must be one of [\"batter\", \"pitcher\"], got '{s}'"
            ))),
        }
    }
}
