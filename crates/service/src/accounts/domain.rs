use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, StoreError};

pub const DEFAULT_ROLE: &str = "user";

/// The administered account.
///
/// `id` is assigned by the store on create and never changes afterwards.
/// Everything besides `id`, `name` and `email` is carried through the HTTP
/// layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            id: 0,
            email: String::new(),
            name: String::new(),
            active: true,
            roles: Vec::new(),
            last_login: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Account {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), ..Self::default() }
    }

    /// Field rules every store applies before writing.
    ///
    /// ```
    /// use service::accounts::domain::Account;
    /// let err = Account::new("", "nope").validate().unwrap_err();
    /// assert!(matches!(err, service::errors::StoreError::Validation(f) if f.len() == 2));
    /// ```
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut errors = FieldErrors::new();

        if self.email.trim().is_empty() {
            errors.insert("email".into(), "cannot be blank".into());
        } else if !is_email(&self.email) {
            errors.insert("email".into(), "must be a valid email address".into());
        }

        if self.name.trim().is_empty() {
            errors.insert("name".into(), "cannot be blank".into());
        } else if !self.name.is_ascii() {
            errors.insert("name".into(), "must contain ASCII characters only".into());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation(errors))
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
