pub mod http_client;
pub mod primary;
pub mod reference;
pub mod stats;
pub mod stream;
mod fetch_utils;
mod params;

// Re-export the clients and their argument types
pub use http_client::create_http_client;
pub use params::Ids;
pub use primary::PrimaryClient;
pub use reference::{
    GameEventsQuery, PlayerInfoQuery, ReferenceClient, RosterQuery, SeasonLeadersQuery,
};
pub use stats::{PlayerType, SortOrder, StatCategory, VALID_CATEGORIES, VALID_STATS};
pub use stream::DataStream;
