//! Player CRUD, search and ranking queries.

mod common;

use common::{player, team, test_db, test_db_with};
use sports_management::models::PlayerInput;
use sports_management::service::UNKNOWN_TEAM;
use sports_management::{PlayerService, TeamService};

#[tokio::test]
async fn add_and_get_round_trip() {
    let db = test_db().await;
    let team_id = TeamService::add(&db.pool, &team("Inter")).await.unwrap().id.unwrap();
    let input = PlayerInput {
        team_id: Some(team_id),
        position: Some("Forward".into()),
        jersey_number: Some(10),
        age: Some(26),
        height: Some(174.0),
        weight: Some(72.5),
        ranking: 91,
        goals: 24,
        assists: 6,
        matches_played: 34,
        ..PlayerInput::named("Lautaro", "Martinez")
    };
    let out = PlayerService::add(&db.pool, &input).await.unwrap();
    assert!(out.success);
    assert_eq!(out.message, "Player added successfully");

    let p = PlayerService::get(&db.pool, out.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(p.first_name, "Lautaro");
    assert_eq!(p.team_id, Some(team_id));
    assert_eq!(p.position.as_deref(), Some("Forward"));
    assert_eq!(p.weight, Some(72.5));
    assert_eq!(p.matches_played, 34);
}

#[tokio::test]
async fn player_without_team_is_allowed() {
    let db = test_db().await;
    let out = PlayerService::add(&db.pool, &player("Free", "Agent", None, 50)).await.unwrap();
    assert!(out.success);
    let all = PlayerService::list(&db.pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].team_name, None);
}

#[tokio::test]
async fn unknown_team_is_rejected_when_foreign_keys_are_on() {
    let db = test_db().await;
    let out = PlayerService::add(&db.pool, &player("Lost", "Soul", Some(404), 1)).await.unwrap();
    assert!(!out.success);
    assert_eq!(out.message, UNKNOWN_TEAM);
    assert_eq!(PlayerService::count(&db.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_team_is_stored_when_foreign_keys_are_off() {
    let db = test_db_with(false).await;
    let out = PlayerService::add(&db.pool, &player("Lost", "Soul", Some(404), 1)).await.unwrap();
    assert!(out.success);
    let p = PlayerService::get(&db.pool, out.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(p.team_id, Some(404));
    let joined = PlayerService::list(&db.pool).await.unwrap();
    assert_eq!(joined[0].team_name, None);
}

#[tokio::test]
async fn list_joins_team_name_and_sorts_by_ranking() {
    let db = test_db().await;
    let team_id = TeamService::add(&db.pool, &team("Juventus")).await.unwrap().id.unwrap();
    PlayerService::add(&db.pool, &player("Low", "Rank", Some(team_id), 10)).await.unwrap();
    PlayerService::add(&db.pool, &player("High", "Rank", None, 90)).await.unwrap();
    PlayerService::add(&db.pool, &player("Mid", "Rank", Some(team_id), 50)).await.unwrap();

    let all = PlayerService::list(&db.pool).await.unwrap();
    let firsts: Vec<&str> = all.iter().map(|p| p.player.first_name.as_str()).collect();
    assert_eq!(firsts, ["High", "Mid", "Low"]);
    assert_eq!(all[1].team_name.as_deref(), Some("Juventus"));
    assert_eq!(all[0].team_name, None);
}

#[tokio::test]
async fn by_team_filters_and_sorts() {
    let db = test_db().await;
    let a = TeamService::add(&db.pool, &team("A")).await.unwrap().id.unwrap();
    let b = TeamService::add(&db.pool, &team("B")).await.unwrap().id.unwrap();
    PlayerService::add(&db.pool, &player("A1", "x", Some(a), 5)).await.unwrap();
    PlayerService::add(&db.pool, &player("B1", "x", Some(b), 7)).await.unwrap();
    PlayerService::add(&db.pool, &player("A2", "x", Some(a), 9)).await.unwrap();

    let roster = PlayerService::by_team(&db.pool, a).await.unwrap();
    let firsts: Vec<&str> = roster.iter().map(|p| p.first_name.as_str()).collect();
    assert_eq!(firsts, ["A2", "A1"]);
    assert!(PlayerService::by_team(&db.pool, 999).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_the_record() {
    let db = test_db().await;
    let team_id = TeamService::add(&db.pool, &team("Roma")).await.unwrap().id.unwrap();
    let id = PlayerService::add(
        &db.pool,
        &PlayerInput {
            goals: 3,
            position: Some("Defender".into()),
            ..player("Gianluca", "Mancini", Some(team_id), 70)
        },
    )
    .await
    .unwrap()
    .id
    .unwrap();

    let out = PlayerService::update(&db.pool, id, &player("Gianluca", "Mancini", None, 72))
        .await
        .unwrap();
    assert!(out.success);
    assert_eq!(out.message, "Player updated successfully");

    let p = PlayerService::get(&db.pool, id).await.unwrap().unwrap();
    assert_eq!(p.team_id, None);
    assert_eq!(p.ranking, 72);
    assert_eq!(p.goals, 0);
    assert_eq!(p.position.as_deref(), Some(""));
}

#[tokio::test]
async fn update_of_missing_id_is_a_silent_success() {
    let db = test_db().await;
    let out = PlayerService::update(&db.pool, 31337, &player("No", "One", None, 0)).await.unwrap();
    assert!(out.success);
    assert_eq!(PlayerService::count(&db.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_removes_and_always_succeeds() {
    let db = test_db().await;
    let id = PlayerService::add(&db.pool, &player("Gone", "Soon", None, 1)).await.unwrap().id.unwrap();
    assert!(PlayerService::delete(&db.pool, id).await.unwrap().success);
    assert!(PlayerService::get(&db.pool, id).await.unwrap().is_none());
    assert!(PlayerService::delete(&db.pool, id).await.unwrap().success);
}

async fn seed_search_players(db: &common::TestDb) {
    for (first, last, rank) in [
        ("Harry", "Kane", 96),
        ("Harry", "Maguire", 82),
        ("Mohamed", "Salah", 94),
        ("Kylian", "Mbappe", 98),
        ("Per", "Cent%", 10),
    ] {
        PlayerService::add(&db.pool, &player(first, last, None, rank)).await.unwrap();
    }
}

#[tokio::test]
async fn empty_search_matches_everyone() {
    let db = test_db().await;
    seed_search_players(&db).await;
    let hits = PlayerService::search(&db.pool, "").await.unwrap();
    assert_eq!(hits.len(), 5);
    assert_eq!(hits[0].player.last_name, "Mbappe");
}

#[tokio::test]
async fn search_is_case_insensitive_on_either_name() {
    let db = test_db().await;
    seed_search_players(&db).await;

    let hits = PlayerService::search(&db.pool, "harry").await.unwrap();
    let lasts: Vec<&str> = hits.iter().map(|p| p.player.last_name.as_str()).collect();
    assert_eq!(lasts, ["Kane", "Maguire"]);

    let hits = PlayerService::search(&db.pool, "SAL").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].player.first_name, "Mohamed");

    // Every seeded name except "Per Cent%" contains an "a".
    let hits = PlayerService::search(&db.pool, "a").await.unwrap();
    assert_eq!(hits.len(), 4);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let db = test_db().await;
    seed_search_players(&db).await;
    let hits = PlayerService::search(&db.pool, "%").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].player.first_name, "Per");
    assert!(PlayerService::search(&db.pool, "_arry").await.unwrap().is_empty());
}

#[tokio::test]
async fn top_by_ranking_truncates_in_order() {
    let db = test_db().await;
    for (name, rank) in [("E", 50), ("A", 90), ("C", 70), ("B", 80), ("D", 60)] {
        PlayerService::add(&db.pool, &player(name, "x", None, rank)).await.unwrap();
    }
    let top = PlayerService::top_by_ranking(&db.pool, 3).await.unwrap();
    let ranks: Vec<i64> = top.iter().map(|p| p.player.ranking).collect();
    assert_eq!(ranks, [90, 80, 70]);

    assert_eq!(PlayerService::top_by_ranking(&db.pool, 1000).await.unwrap().len(), 5);
    assert!(PlayerService::top_by_ranking(&db.pool, 0).await.unwrap().is_empty());
    assert!(PlayerService::top_by_ranking(&db.pool, -1).await.unwrap().is_empty());
}
