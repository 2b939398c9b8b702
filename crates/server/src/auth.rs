//! Admin role gate.
//!
//! Every request under the admin router must carry an HS256 JWT, either as
//! `Authorization: Bearer <token>` or in the `jwt` cookie, whose `roles` claim
//! contains the configured admin role.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, Method};
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::JsonApiError;

pub const TOKEN_COOKIE: &str = "jwt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,
}

impl AdminClaims {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[derive(Clone)]
pub struct RoleGate {
    key: DecodingKey,
    role: Arc<str>,
}

impl RoleGate {
    pub fn new(secret: &str, role: &str) -> Self {
        Self { key: DecodingKey::from_secret(secret.as_bytes()), role: Arc::from(role) }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Decode `token` and check it grants the gate's role.
    pub fn authorize(&self, token: &str) -> Result<AdminClaims, JsonApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let claims = decode::<AdminClaims>(token, &self.key, &validation)
            .map_err(|e| {
                warn!(err = %e, "token validation failed");
                JsonApiError::unauthorized()
            })?
            .claims;

        if !claims.has_role(&self.role) {
            warn!(sub = %claims.sub, role = %self.role, "token lacks required role");
            return Err(JsonApiError::forbidden());
        }
        Ok(claims)
    }
}

/// Bearer token from the Authorization header, falling back to the `jwt`
/// cookie. A non-Bearer Authorization header yields no token.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(authz) = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        return authz
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
    }

    let cookies = headers.get(header::COOKIE).and_then(|v| v.to_str().ok())?;
    cookies
        .split(';')
        .filter_map(|kv| kv.trim().split_once('='))
        .find(|(name, _)| *name == TOKEN_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|t| !t.is_empty())
}

/// Middleware: 401 without a valid token, 403 without the admin role.
/// Verified claims are made available to handlers as an extension.
pub async fn require_role(
    State(gate): State<RoleGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let Some(token) = extract_token(req.headers()) else {
        warn!(path = %req.uri().path(), "missing bearer token and jwt cookie");
        return Err(JsonApiError::unauthorized());
    };

    let claims = gate.authorize(&token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
