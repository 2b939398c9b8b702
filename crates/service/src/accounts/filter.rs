//! Query-string driven account filter.

use std::cmp::Ordering;

use thiserror::Error;

use super::domain::Account;
use crate::pagination::Pagination;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for `{param}`: {reason}")]
pub struct FilterError {
    pub param: String,
    pub reason: String,
}

impl FilterError {
    fn new(param: &str, reason: impl Into<String>) -> Self {
        Self { param: param.to_string(), reason: reason.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
    Email,
    CreatedAt,
}

impl SortColumn {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: SortColumn,
    pub descending: bool,
}

/// Which accounts a list call returns and in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFilter {
    pub pagination: Pagination,
    pub name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
    /// Never empty; defaults to `id` ascending.
    pub order: Vec<SortKey>,
}

impl Default for AccountFilter {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            name: None,
            email: None,
            active: None,
            order: vec![SortKey { column: SortColumn::Id, descending: false }],
        }
    }
}

impl AccountFilter {
    /// Build a filter from decoded query pairs. Unknown keys are ignored,
    /// empty values count as absent.
    ///
    /// ```
    /// use service::accounts::filter::AccountFilter;
    /// let f = AccountFilter::from_params([("page", "2"), ("name", "ali")]).unwrap();
    /// assert_eq!(f.pagination.page, 2);
    /// assert!(AccountFilter::from_params([("limit", "ten")]).is_err());
    /// ```
    pub fn from_params<'a, I>(params: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filter = Self::default();
        for (key, value) in params {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key {
                "page" => filter.pagination.page = parse_count("page", value)?,
                "limit" => filter.pagination.per_page = parse_count("limit", value)?,
                "name" => filter.name = Some(value.to_string()),
                "email" => filter.email = Some(value.to_string()),
                "active" => {
                    let active = value
                        .parse::<bool>()
                        .map_err(|_| FilterError::new("active", "must be true or false"))?;
                    filter.active = Some(active);
                }
                "order" => filter.order = parse_order(value)?,
                _ => {}
            }
        }
        Ok(filter)
    }

    /// Whether `account` passes the name/email/active criteria.
    pub fn matches(&self, account: &Account) -> bool {
        let contains = |haystack: &str, needle: &Option<String>| match needle {
            Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
            None => true,
        };
        contains(&account.name, &self.name)
            && contains(&account.email, &self.email)
            && self.active.map_or(true, |a| account.active == a)
    }

    /// Ordering of two accounts under the filter's sort keys.
    pub fn compare(&self, a: &Account, b: &Account) -> Ordering {
        for key in &self.order {
            let ord = match key.column {
                SortColumn::Id => a.id.cmp(&b.id),
                SortColumn::Name => a.name.cmp(&b.name),
                SortColumn::Email => a.email.cmp(&b.email),
                SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            let ord = if key.descending { ord.reverse() } else { ord };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

fn parse_count(param: &str, value: &str) -> Result<u32, FilterError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| FilterError::new(param, "must be a positive integer"))
}

fn parse_order(value: &str) -> Result<Vec<SortKey>, FilterError> {
    let mut keys = Vec::new();
    for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (descending, name) = match part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, part),
        };
        let column = SortColumn::parse(name)
            .ok_or_else(|| FilterError::new("order", format!("unknown column `{name}`")))?;
        keys.push(SortKey { column, descending });
    }
    if keys.is_empty() {
        return Err(FilterError::new("order", "no columns given"));
    }
    Ok(keys)
}
