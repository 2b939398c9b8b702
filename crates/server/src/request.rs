//! Request payloads.
//!
//! Both payloads bind a partial account: absent fields leave the target
//! untouched. An `id` in the body is ignored, the path decides.

use serde::Deserialize;
use utoipa::IntoParams;

use service::accounts::filter::FilterError;
use service::accounts::{Account, AccountFilter};

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AccountRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub active: Option<bool>,
    pub roles: Option<Vec<String>>,
}

impl AccountRequest {
    /// Copy every present field onto `account`.
    pub fn apply(self, account: &mut Account) {
        if let Some(email) = self.email {
            account.email = email;
        }
        if let Some(name) = self.name {
            account.name = name;
        }
        if let Some(active) = self.active {
            account.active = active;
        }
        if let Some(roles) = self.roles {
            account.roles = roles;
        }
    }

    pub fn into_account(self) -> Account {
        let mut account = Account::default();
        self.apply(&mut account);
        account
    }
}

/// `{"account": {...}}` envelope used by the name resource.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NameRequest {
    #[serde(default)]
    pub account: AccountRequest,
}

/// Query string of `GET /accounts`. Values stay raw here so that
/// [`AccountFilter`] can name the offending parameter.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page
    pub page: Option<String>,
    /// Page size, clamped to 1..=100, default 20
    pub limit: Option<String>,
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Case-insensitive substring of the email
    pub email: Option<String>,
    /// `true` or `false`
    pub active: Option<String>,
    /// Comma separated columns (id, name, email, created_at); `-` prefix sorts descending
    pub order: Option<String>,
}

impl ListParams {
    pub fn to_filter(&self) -> Result<AccountFilter, FilterError> {
        let pairs = [
            ("page", &self.page),
            ("limit", &self.limit),
            ("name", &self.name),
            ("email", &self.email),
            ("active", &self.active),
            ("order", &self.order),
        ];
        AccountFilter::from_params(
            pairs.into_iter().filter_map(|(k, v)| v.as_deref().map(|v| (k, v))),
        )
    }
}
