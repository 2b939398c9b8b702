//! `/names_ary`: read-only column view.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use service::accounts::NameAryStore;

use crate::errors::JsonApiError;
use crate::responses::NameAryListResponse;

pub type Store = Arc<dyn NameAryStore>;

pub struct NameAryResource {
    store: Store,
}

impl NameAryResource {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn router(&self) -> Router {
        Router::new().route("/", get(list_names_ary)).with_state(self.store.clone())
    }
}

#[utoipa::path(
    get, path = "/admin/names_ary", tag = "names",
    responses(
        (status = 200, description = "Parallel name and email columns", body = crate::openapi::NameAryListDoc),
        (status = 400, description = "List failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_names_ary(State(store): State<Store>) -> Result<Json<NameAryListResponse>, JsonApiError> {
    let accounts = store.list_only().await.map_err(|e| {
        error!(err = %e, "list names_ary failed");
        JsonApiError::from(e)
    })?;
    info!(returned = accounts.len(), "list names_ary");
    Ok(Json(NameAryListResponse::new(&accounts)))
}
