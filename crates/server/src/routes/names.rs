//! `/names`: name-centric view where single-account bodies are wrapped in an
//! `account` envelope.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use tracing::{error, info};

use service::accounts::NameStore;

use crate::context::{resolve_account, AccountCtx};
use crate::errors::JsonApiError;
use crate::request::NameRequest;
use crate::responses::{NameListResponse, NameResponse};

pub type Store = Arc<dyn NameStore>;

pub struct NameResource {
    store: Store,
}

impl NameResource {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn router(&self) -> Router {
        let item = Router::new()
            .route("/:account_id", get(get_name).put(update_name).delete(delete_name))
            .route_layer(middleware::from_fn_with_state(
                self.store.clone(),
                resolve_account::<dyn NameStore>,
            ));

        Router::new()
            .route("/", get(list_names).post(create_name))
            .merge(item)
            .with_state(self.store.clone())
    }
}

#[utoipa::path(
    get, path = "/admin/names", tag = "names",
    responses(
        (status = 200, description = "All names with detail", body = crate::openapi::NameListDoc),
        (status = 400, description = "List failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_names(State(store): State<Store>) -> Result<Json<NameListResponse>, JsonApiError> {
    let accounts = store.list_only().await.map_err(|e| {
        error!(err = %e, "list names failed");
        JsonApiError::from(e)
    })?;
    info!(returned = accounts.len(), "list names");
    Ok(Json(NameListResponse::new(&accounts)))
}

#[utoipa::path(
    post, path = "/admin/names", tag = "names",
    request_body = crate::openapi::NameRequestDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::NameEnvelopeDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_name(
    State(store): State<Store>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<NameResponse>, JsonApiError> {
    let Json(data) = payload?;
    let created = store.create(data.account.into_account()).await?;
    info!(id = created.id, "account created via names");
    Ok(Json(created.into()))
}

#[utoipa::path(
    get, path = "/admin/names/{account_id}", tag = "names",
    params(("account_id" = i32, Path,)),
    responses(
        (status = 200, description = "OK", body = crate::openapi::NameEnvelopeDoc),
        (status = 400, description = "Non-numeric id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_name(Extension(AccountCtx(account)): Extension<AccountCtx>) -> Json<NameResponse> {
    Json(account.into())
}

#[utoipa::path(
    put, path = "/admin/names/{account_id}", tag = "names",
    params(("account_id" = i32, Path,)),
    request_body = crate::openapi::NameRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::NameEnvelopeDoc),
        (status = 400, description = "Bad id or malformed body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_name(
    State(store): State<Store>,
    Extension(AccountCtx(mut account)): Extension<AccountCtx>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<NameResponse>, JsonApiError> {
    let Json(data) = payload?;
    data.account.apply(&mut account);
    let updated = store.update(&account).await?;
    info!(id = updated.id, "account updated via names");
    Ok(Json(updated.into()))
}

/// Unlike `/accounts`, the deleted account is echoed back.
#[utoipa::path(
    delete, path = "/admin/names/{account_id}", tag = "names",
    params(("account_id" = i32, Path,)),
    responses(
        (status = 200, description = "Deleted account", body = crate::openapi::NameEnvelopeDoc),
        (status = 400, description = "Bad id or delete failure", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_name(
    State(store): State<Store>,
    Extension(AccountCtx(account)): Extension<AccountCtx>,
) -> Result<Json<NameResponse>, JsonApiError> {
    store.delete(&account).await?;
    info!(id = account.id, "account deleted via names");
    Ok(Json(account.into()))
}
