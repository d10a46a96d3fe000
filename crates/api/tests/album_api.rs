//! HTTP-level integration tests for the album endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

async fn make_artist(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/artists",
        serde_json::json!({"name": name}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_album_resolves_slug(pool: PgPool) {
    let artist_id = make_artist(&pool, "A").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/albums",
        serde_json::json!({"name": "First Light", "artist_id": artist_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["slug"], "first-light");
    assert_eq!(json["artist_id"], artist_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_albums_filtered_by_artist(pool: PgPool) {
    let a1 = make_artist(&pool, "A1").await;
    let a2 = make_artist(&pool, "A2").await;

    for (artist_id, name) in [(a1, "X"), (a1, "Y"), (a2, "Z")] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/albums",
            serde_json::json!({"name": name, "artist_id": artist_id}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/albums?artist_id={a1}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let all = get(common::build_test_app(pool), "/api/v1/albums").await;
    assert_eq!(body_json(all).await.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_album_tracks_ordered_with_unordered_last(pool: PgPool) {
    let artist_id = make_artist(&pool, "A").await;

    let album = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/albums",
        serde_json::json!({"name": "Ordered", "artist_id": artist_id}),
    )
    .await;
    let album_id = body_json(album).await["id"].as_i64().unwrap();

    for (name, order) in [
        ("Late", Some(2)),
        ("Loose", None),
        ("Early", Some(1)),
    ] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/tracks",
            serde_json::json!({
                "name": name,
                "artist_id": artist_id,
                "album_id": album_id,
                "album_order": order,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/albums/{album_id}/tracks"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Ordered");

    let names: Vec<&str> = json["tracks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Early", "Late", "Loose"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_album_with_tracks_missing_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/albums/999999/tracks").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
