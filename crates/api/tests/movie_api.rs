//! HTTP-level integration tests for the `/movies` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the
//! router without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::SqlitePool;

fn movie_payload(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "Описание",
        "trailer": "http://example.com/trailer",
        "year": 2020,
        "rating": 7.5,
        "genre_id": 1,
        "director_id": null,
    })
}

#[sqlx::test]
async fn create_movie_returns_201_with_message(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/movies", movie_payload("X")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, "Фильм добавлен");
}

#[sqlx::test]
async fn create_then_get_returns_one_element_array(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(app, "/movies", movie_payload("X")).await;

    // The create response carries only a confirmation message; fetch
    // the assigned id from the listing.
    let app = common::build_test_app(pool.clone());
    let listing = body_json(get(app, "/movies").await).await;
    let id = listing[0]["id"].as_i64().unwrap();
    assert!(id > 0);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().expect("single-item GET wraps in an array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id);
    assert_eq!(items[0]["title"], "X");
    assert_eq!(items[0]["description"], "Описание");
    assert_eq!(items[0]["trailer"], "http://example.com/trailer");
    assert_eq!(items[0]["year"], 2020);
    assert_eq!(items[0]["rating"], 7.5);
    assert_eq!(items[0]["genre_id"], 1);
    assert_eq!(items[0]["director_id"], serde_json::Value::Null);
}

#[sqlx::test]
async fn collection_paths_accept_trailing_slash(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    // The canonical paths of the original service carry a trailing
    // slash; both spellings must resolve to the collection routes.
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/movies/", movie_payload("X")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, "Фильм добавлен");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/movies/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(app, "/movies/?director_id=5").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test]
async fn missing_movie_returns_404_with_id_in_message(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/movies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, "Нет фильма с id 999999");

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/movies/999999", movie_payload("X")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, "Нет фильма с id 999999");

    let app = common::build_test_app(pool);
    let response = delete(app, "/movies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, "Нет фильма с id 999999");
}

#[sqlx::test]
async fn put_fully_replaces_fields(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(app, "/movies", movie_payload("Старый")).await;

    let app = common::build_test_app(pool.clone());
    let listing = body_json(get(app, "/movies").await).await;
    let id = listing[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/movies/{id}"),
        serde_json::json!({
            "title": "Новый",
            "description": "Другое",
            "trailer": "http://example.com/new",
            "year": 2021,
            "rating": 8.1,
            "genre_id": null,
            "director_id": 3,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, "Фильм заменен");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert_eq!(json[0]["title"], "Новый");
    assert_eq!(json[0]["year"], 2021);
    assert_eq!(json[0]["genre_id"], serde_json::Value::Null);
    assert_eq!(json[0]["director_id"], 3);
}

#[sqlx::test]
async fn put_ignores_client_supplied_id(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(app, "/movies", movie_payload("X")).await;

    let app = common::build_test_app(pool.clone());
    let listing = body_json(get(app, "/movies").await).await;
    let id = listing[0]["id"].as_i64().unwrap();

    // A body that tries to rewrite the primary key: the unknown `id`
    // field is ignored and the row keeps its key.
    let mut body = movie_payload("X");
    body["id"] = serde_json::json!(777);
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/movies/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/movies/777").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test]
async fn delete_then_get_returns_404(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(app, "/movies", movie_payload("X")).await;

    let app = common::build_test_app(pool.clone());
    let listing = body_json(get(app, "/movies").await).await;
    let id = listing[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, "Фильм удален из базы");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn list_filters_by_director_id_excluding_nulls(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    for (title, director_id) in [
        ("A", serde_json::json!(5)),
        ("B", serde_json::json!(6)),
        ("C", serde_json::Value::Null),
    ] {
        let mut body = movie_payload(title);
        body["director_id"] = director_id;
        let app = common::build_test_app(pool.clone());
        post_json(app, "/movies", body).await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/movies?director_id=5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "A");

    // Both filters at once are conjunctive.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/movies?director_id=6&genre_id=1").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["title"], "B");
}

#[sqlx::test]
async fn list_treats_empty_filter_values_as_absent(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    for title in ["A", "B"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/movies", movie_payload(title)).await;
    }

    // `?director_id=` with no value is the same as no filter at all.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/movies?director_id=").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    // An empty value next to a real one leaves only the real filter.
    let app = common::build_test_app(pool);
    let response = get(app, "/movies?director_id=&genre_id=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn create_with_missing_field_is_rejected(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/movies",
        serde_json::json!({"title": "X", "year": 2020}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test]
async fn create_ignores_unknown_fields(pool: SqlitePool) {
    common::setup_schema(&pool).await;

    let mut body = movie_payload("X");
    body["id"] = serde_json::json!(123);
    body["poster"] = serde_json::json!("http://example.com/poster");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/movies", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The store assigned its own id, not the caller's.
    let app = common::build_test_app(pool);
    let listing = body_json(get(app, "/movies").await).await;
    assert_eq!(listing[0]["id"], 1);
}
