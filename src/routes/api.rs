//! Team, player, statistics and bulk-data routes. Mounted under `/api` by [`crate::routes::app`].

use crate::handlers::{data, players, stats, teams};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/teams", get(teams::list).post(teams::create))
        .route(
            "/teams/:id",
            get(teams::read).put(teams::update).delete(teams::delete),
        )
        .route("/teams/:id/players", get(teams::players))
        .route("/players", get(players::list).post(players::create))
        // Static segments win over `/players/:id`.
        .route("/players/search", get(players::search))
        .route("/players/top", get(players::top_default))
        .route("/players/top/:limit", get(players::top))
        .route(
            "/players/:id",
            get(players::read).put(players::update).delete(players::delete),
        )
        .route("/stats/players", get(stats::players))
        .route("/stats/teams", get(stats::teams))
        .route("/sample-data", post(data::add_sample_data))
        .route("/clear-data", delete(data::clear_all_data))
        .with_state(state)
}
