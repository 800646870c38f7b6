//! Blaseball API Client Library
//!
//! Typed async access to the two public Blaseball data services: the primary
//! simulation API (live game data, league objects, elections, statsheets and
//! a Server-Sent-Events live feed) and the Blaseball Reference statistics API.
//!
//! Every call issues one HTTP GET and returns the decoded JSON document as a
//! [`serde_json::Value`], without reshaping it. Season and day numbers are
//! 1-based at this interface and translated to the services' 0-based values.
//!
//! # Examples
//!
//! ```rust,no_run
//! use blaser::{PrimaryClient, ReferenceClient, SeasonLeadersQuery};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> blaser::Result<()> {
//!     let primary = PrimaryClient::new()?;
//!     let players = primary
//!         .get_player_info(["c0732e36-3731-4f1a-abdc-daa9563b6506"])
//!         .await?;
//!     println!("{players}");
//!
//!     let reference = ReferenceClient::new()?;
//!     let leaders = reference
//!         .get_season_leaders(&SeasonLeadersQuery::new(8, "pitching", "era").order("asc"))
//!         .await?;
//!     println!("{leaders}");
//!
//!     // Live feed: one JSON value per message until the connection ends
//!     let mut feed = primary.stream_data().await?;
//!     if let Some(message) = feed.next().await {
//!         println!("{}", message?);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use api::{
    DataStream, GameEventsQuery, Ids, PlayerInfoQuery, PlayerType, PrimaryClient,
    ReferenceClient, RosterQuery, SeasonLeadersQuery, SortOrder, StatCategory,
    VALID_CATEGORIES, VALID_STATS,
};
pub use config::ClientConfig;
pub use error::{BlaseballError, Result};
pub use logging::setup_logging;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
