use std::collections::BTreeMap;

use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct AccountDoc {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub active: bool,
    pub roles: Option<Vec<String>>,
    pub last_login: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(ToSchema)]
pub struct AccountRequestDoc {
    pub email: Option<String>,
    pub name: Option<String>,
    pub active: Option<bool>,
    pub roles: Option<Vec<String>>,
}

#[derive(ToSchema)]
pub struct NameRequestDoc {
    pub account: AccountRequestDoc,
}

#[derive(ToSchema)]
pub struct AccountListDoc {
    pub accounts: Vec<AccountDoc>,
    pub names: Vec<String>,
    pub count: u64,
}

#[derive(ToSchema)]
pub struct NameEnvelopeDoc {
    pub account: AccountDoc,
}

#[derive(ToSchema)]
pub struct NameDetailDoc {
    pub name: String,
    pub email: String,
}

#[derive(ToSchema)]
pub struct NameListDoc {
    pub names: Vec<String>,
    pub detail: Vec<NameDetailDoc>,
}

#[derive(ToSchema)]
pub struct NameAryListDoc {
    pub name: Vec<String>,
    pub email: Vec<String>,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub status: String,
    pub error: Option<String>,
    pub errors: Option<BTreeMap<String, String>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::admin::hello,
        crate::routes::accounts::list_accounts,
        crate::routes::accounts::create_account,
        crate::routes::accounts::get_account,
        crate::routes::accounts::update_account,
        crate::routes::accounts::delete_account,
        crate::routes::names::list_names,
        crate::routes::names::create_name,
        crate::routes::names::get_name,
        crate::routes::names::update_name,
        crate::routes::names::delete_name,
        crate::routes::names_ary::list_names_ary,
    ),
    components(
        schemas(
            HealthResponse,
            AccountDoc,
            AccountRequestDoc,
            NameRequestDoc,
            AccountListDoc,
            NameEnvelopeDoc,
            NameDetailDoc,
            NameListDoc,
            NameAryListDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "admin"),
        (name = "accounts"),
        (name = "names"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
