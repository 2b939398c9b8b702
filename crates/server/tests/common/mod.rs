#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::Service;

use server::auth::{AdminClaims, RoleGate};
use server::routes::{build_router, AdminApi};
use service::accounts::repo::MemoryAccountStore;
use service::accounts::Account;

pub const SECRET: &str = "test-secret";

pub fn token(roles: &[&str]) -> String {
    token_with_exp(roles, (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp() as usize)
}

pub fn token_with_exp(roles: &[&str], exp: usize) -> String {
    let claims = AdminClaims {
        sub: "tester".into(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        exp,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
}

pub fn admin_token() -> String {
    token(&["admin"])
}

pub fn seeded_store() -> Arc<MemoryAccountStore> {
    Arc::new(MemoryAccountStore::with_accounts([
        Account::new("alice", "alice@example.com"),
        Account::new("bob", "bob@example.com"),
        Account::new("carol", "carol@example.com"),
    ]))
}

pub fn app(store: Arc<MemoryAccountStore>) -> Router {
    let admin = AdminApi::new(store);
    build_router(&admin, RoleGate::new(SECRET, "admin"), tower_http::cors::CorsLayer::very_permissive())
}

pub struct Reply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> Reply {
    let resp = app.clone().call(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
    Reply { status, body }
}

/// Request carrying the admin bearer token.
pub fn admin_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", admin_token()));
    match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Reply {
    send(app, admin_request(method, uri, body)).await
}
