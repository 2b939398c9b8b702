//! Admin aggregate: one store, three façades.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use sea_orm::DatabaseConnection;

use service::accounts::repo::SeaOrmAccountStore;
use service::accounts::{AccountStore, NameAryStore, NameStore};

use super::accounts::AccountResource;
use super::names::NameResource;
use super::names_ary::NameAryResource;

pub struct AdminApi {
    pub accounts: AccountResource,
    pub names: NameResource,
    pub names_ary: NameAryResource,
}

impl AdminApi {
    /// Wire all three resources to the same store instance.
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: AccountStore + NameStore + NameAryStore + 'static,
    {
        Self {
            accounts: AccountResource::new(store.clone()),
            names: NameResource::new(store.clone()),
            names_ary: NameAryResource::new(store),
        }
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmAccountStore::new(db)))
    }

    /// Admin routes, relative to the mount point. Authorization is applied by
    /// the caller.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(hello))
            .nest("/accounts", self.accounts.router())
            .nest("/names", self.names.router())
            .nest("/names_ary", self.names_ary.router())
    }
}

#[utoipa::path(
    get, path = "/admin", tag = "admin",
    responses((status = 200, description = "Greeting", body = String))
)]
pub async fn hello() -> &'static str {
    "Hello Admin"
}
