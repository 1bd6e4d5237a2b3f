//! Named-field records for rows, derived statistics and write inputs.

pub mod outcome;
pub mod player;
pub mod stats;
pub mod team;

pub use outcome::OpOutcome;
pub use player::{Player, PlayerInput, PlayerWithTeam};
pub use stats::{PlayerStat, TeamStat};
pub use team::{Team, TeamInput};

/// Row identifier used by both tables (SQLite `INTEGER PRIMARY KEY`).
pub type DbId = i64;

// Defaults for omitted nullable input fields. `Some` so that only an explicit `null` binds NULL.
pub(crate) fn empty_text() -> Option<String> {
    Some(String::new())
}

pub(crate) fn zero() -> Option<i64> {
    Some(0)
}

pub(crate) fn zero_measure() -> Option<f64> {
    Some(0.0)
}
