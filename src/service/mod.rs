//! Data access over an explicitly passed `SqlitePool`: teams, players, statistics, bulk utilities.

mod bulk;
mod players;
pub mod sample;
mod stats;
mod teams;
pub mod validation;

pub use bulk::{BulkService, SAMPLE_DATA_EXISTS};
pub use players::{escape_like, PlayerService, DEFAULT_TOP_LIMIT, UNKNOWN_TEAM};
pub use stats::StatsService;
pub use teams::{TeamService, DUPLICATE_NAME};
pub use validation::{InputSchema, RequestValidator};
