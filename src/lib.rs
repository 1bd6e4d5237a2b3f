//! Sports management backend: teams, players and their statistics over a SQLite file,
//! served as a JSON REST API.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_schema;
pub use models::{OpOutcome, Player, PlayerInput, PlayerStat, PlayerWithTeam, Team, TeamInput, TeamStat};
pub use routes::{api_routes, app, common_routes};
pub use service::{BulkService, PlayerService, StatsService, TeamService};
pub use state::AppState;
pub use store::connect;
