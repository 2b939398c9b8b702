//! Response projections. Pure functions of the accounts they are given.

use serde::{Deserialize, Serialize};

use service::accounts::Account;

/// Appended to each name in the name list `detail` entries.
pub const NAME_DETAIL_SUFFIX: &str = " is the email";

/// `GET /accounts` body. `names[i]` is `accounts[i].name`; `count` is the
/// number of matches across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountListResponse {
    pub accounts: Vec<Account>,
    pub names: Vec<String>,
    pub count: u64,
}

impl AccountListResponse {
    pub fn new(accounts: Vec<Account>, count: u64) -> Self {
        let names = accounts.iter().map(|a| a.name.clone()).collect();
        Self { accounts, names, count }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameResponse {
    pub account: Account,
}

impl From<Account> for NameResponse {
    fn from(account: Account) -> Self {
        Self { account }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameDetail {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameListResponse {
    pub names: Vec<String>,
    pub detail: Vec<NameDetail>,
}

impl NameListResponse {
    pub fn new(accounts: &[Account]) -> Self {
        let names = accounts.iter().map(|a| a.name.clone()).collect();
        let detail = accounts
            .iter()
            .map(|a| NameDetail {
                name: format!("{}{NAME_DETAIL_SUFFIX}", a.name),
                email: a.email.clone(),
            })
            .collect();
        Self { names, detail }
    }
}

/// Column view: `name[i]` and `email[i]` belong to the same account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameAryListResponse {
    pub name: Vec<String>,
    pub email: Vec<String>,
}

impl NameAryListResponse {
    pub fn new(accounts: &[Account]) -> Self {
        let (name, email): (Vec<String>, Vec<String>) = accounts.iter().map(|a| (a.name.clone(), a.email.clone())).unzip();
        Self { name, email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Account> {
        (1..=5)
            .map(|i| Account { id: i, ..Account::new(format!("user{i}"), format!("u{i}@example.com")) })
            .collect()
    }

    #[test]
    fn account_list_names_follow_accounts() {
        let accounts = sample();
        let resp = AccountListResponse::new(accounts.clone(), 42);
        assert_eq!(resp.count, 42);
        assert_eq!(resp.names.len(), resp.accounts.len());
        for (name, account) in resp.names.iter().zip(&accounts) {
            assert_eq!(name, &account.name);
        }
    }

    #[test]
    fn name_detail_carries_suffix_and_email() {
        let accounts = sample();
        let resp = NameListResponse::new(&accounts);
        assert_eq!(resp.detail.len(), accounts.len());
        for (i, account) in accounts.iter().enumerate() {
            assert_eq!(resp.names[i], account.name);
            assert_eq!(resp.detail[i].name, format!("{} is the email", account.name));
            assert_eq!(resp.detail[i].email, account.email);
        }
    }

    #[test]
    fn name_ary_columns_align() {
        let accounts = sample();
        let resp = NameAryListResponse::new(&accounts);
        assert_eq!(resp.name.len(), resp.email.len());
        assert_eq!(resp.name[3], "user4");
        assert_eq!(resp.email[3], "u4@example.com");
    }

    #[test]
    fn empty_inputs_give_empty_arrays() {
        let v = serde_json::to_value(NameAryListResponse::new(&[])).unwrap();
        assert_eq!(v, serde_json::json!({"name": [], "email": []}));
        let v = serde_json::to_value(NameListResponse::new(&[])).unwrap();
        assert_eq!(v, serde_json::json!({"names": [], "detail": []}));
    }
}
