mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, call, seeded_store};

#[tokio::test]
async fn name_list_detail_appends_suffix() {
    let store = seeded_store();
    let app = app(store.clone());

    let reply = call(&app, Method::GET, "/admin/names", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert_eq!(body["names"], json!(["alice", "bob", "carol"]));
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 3);
    assert_eq!(detail[1], json!({"name": "bob is the email", "email": "bob@example.com"}));
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn name_list_ignores_paging_params() {
    let app = app(seeded_store());
    let reply = call(&app, Method::GET, "/admin/names?limit=1&page=abc", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["names"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn single_account_bodies_are_enveloped() {
    let store = seeded_store();
    let app = app(store.clone());

    let reply = call(
        &app,
        Method::POST,
        "/admin/names",
        Some(json!({"account": {"name": "dave", "email": "dave@example.com"}})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["account"]["id"], 4);

    let reply = call(&app, Method::GET, "/admin/names/4", None).await;
    assert_eq!(reply.json()["account"]["name"], "dave");

    let reply = call(&app, Method::PUT, "/admin/names/4", Some(json!({"account": {"name": "david"}}))).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["account"]["name"], "david");
    assert_eq!(reply.json()["account"]["email"], "dave@example.com");
}

#[tokio::test]
async fn create_without_envelope_fails_validation() {
    let app = app(seeded_store());
    let reply = call(&app, Method::POST, "/admin/names", Some(json!({"name": "dave", "email": "dave@example.com"}))).await;
    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(reply.json()["errors"].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_echoes_the_account_unlike_accounts() {
    let store = seeded_store();
    let app = app(store.clone());

    let reply = call(&app, Method::DELETE, "/admin/names/1", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["account"]["email"], "alice@example.com");

    let reply = call(&app, Method::DELETE, "/admin/accounts/2", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.is_empty());

    let reply = call(&app, Method::GET, "/admin/names", None).await;
    assert_eq!(reply.json()["names"], json!(["carol"]));
}

#[tokio::test]
async fn bad_and_missing_ids_match_accounts_behaviour() {
    let store = seeded_store();
    let app = app(store.clone());

    let reply = call(&app, Method::GET, "/admin/names/bob", None).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(store.calls(), 0);

    let reply = call(&app, Method::DELETE, "/admin/names/77", None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn names_ary_columns_are_aligned() {
    let store = seeded_store();
    let app = app(store.clone());

    let reply = call(&app, Method::GET, "/admin/names_ary", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert_eq!(body["name"], json!(["alice", "bob", "carol"]));
    assert_eq!(body["email"], json!(["alice@example.com", "bob@example.com", "carol@example.com"]));
}

#[tokio::test]
async fn names_ary_is_read_only() {
    let store = seeded_store();
    let app = app(store.clone());

    let reply = call(&app, Method::POST, "/admin/names_ary", Some(json!({"name": "x"}))).await;
    assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
    let reply = call(&app, Method::GET, "/admin/names_ary/1", None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn empty_store_gives_empty_arrays() {
    let app = app(std::sync::Arc::new(service::accounts::repo::MemoryAccountStore::new()));
    let reply = call(&app, Method::GET, "/admin/names_ary", None).await;
    assert_eq!(reply.json(), json!({"name": [], "email": []}));
    let reply = call(&app, Method::GET, "/admin/names", None).await;
    assert_eq!(reply.json(), json!({"names": [], "detail": []}));
}
