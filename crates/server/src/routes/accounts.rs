//! `/accounts`: full CRUD returning bare accounts.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use tracing::{error, info};

use service::accounts::{Account, AccountStore};

use crate::context::{resolve_account, AccountCtx};
use crate::errors::JsonApiError;
use crate::request::{AccountRequest, ListParams};
use crate::responses::AccountListResponse;

pub type Store = Arc<dyn AccountStore>;

pub struct AccountResource {
    store: Store,
}

impl AccountResource {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn router(&self) -> Router {
        let item = Router::new()
            .route("/:account_id", get(get_account).put(update_account).delete(delete_account))
            .route_layer(middleware::from_fn_with_state(
                self.store.clone(),
                resolve_account::<dyn AccountStore>,
            ));

        Router::new()
            .route("/", get(list_accounts).post(create_account))
            .merge(item)
            .with_state(self.store.clone())
    }
}

#[utoipa::path(
    get, path = "/admin/accounts", tag = "accounts",
    params(ListParams),
    responses(
        (status = 200, description = "Page of accounts", body = crate::openapi::AccountListDoc),
        (status = 400, description = "Invalid filter or list failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_accounts(
    State(store): State<Store>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<AccountListResponse>, JsonApiError> {
    let Query(params) = query.map_err(|e| JsonApiError::invalid_request(e.body_text()))?;
    let filter = params.to_filter().map_err(|e| JsonApiError::invalid_filter(&e))?;
    let (accounts, count) = store.list(&filter).await.map_err(|e| {
        error!(err = %e, "list accounts failed");
        JsonApiError::from(e)
    })?;
    info!(returned = accounts.len(), count, "list accounts");
    Ok(Json(AccountListResponse::new(accounts, count)))
}

#[utoipa::path(
    post, path = "/admin/accounts", tag = "accounts",
    request_body = crate::openapi::AccountRequestDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::AccountDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_account(
    State(store): State<Store>,
    payload: Result<Json<AccountRequest>, JsonRejection>,
) -> Result<Json<Account>, JsonApiError> {
    let Json(data) = payload?;
    let created = store.create(data.into_account()).await?;
    info!(id = created.id, "account created");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/admin/accounts/{account_id}", tag = "accounts",
    params(("account_id" = i32, Path,)),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AccountDoc),
        (status = 400, description = "Non-numeric id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_account(Extension(AccountCtx(account)): Extension<AccountCtx>) -> Json<Account> {
    Json(account)
}

#[utoipa::path(
    put, path = "/admin/accounts/{account_id}", tag = "accounts",
    params(("account_id" = i32, Path,)),
    request_body = crate::openapi::AccountRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AccountDoc),
        (status = 400, description = "Bad id or malformed body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_account(
    State(store): State<Store>,
    Extension(AccountCtx(mut account)): Extension<AccountCtx>,
    payload: Result<Json<AccountRequest>, JsonRejection>,
) -> Result<Json<Account>, JsonApiError> {
    let Json(data) = payload?;
    data.apply(&mut account);
    let updated = store.update(&account).await?;
    info!(id = updated.id, "account updated");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/admin/accounts/{account_id}", tag = "accounts",
    params(("account_id" = i32, Path,)),
    responses(
        (status = 200, description = "Deleted, empty body"),
        (status = 400, description = "Bad id or delete failure", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_account(
    State(store): State<Store>,
    Extension(AccountCtx(account)): Extension<AccountCtx>,
) -> Result<StatusCode, JsonApiError> {
    store.delete(&account).await?;
    info!(id = account.id, "account deleted");
    Ok(StatusCode::OK)
}
