//! Capability contracts over the account store.
//!
//! Each resource façade depends on the narrowest contract covering the
//! operations it performs. The composite traits are blanket-implemented, so a
//! concrete store only implements the four capabilities.

use async_trait::async_trait;

use super::domain::Account;
use super::filter::AccountFilter;
use crate::errors::StoreError;

/// Resolve one account by identifier.
#[async_trait]
pub trait AccountLookup: Send + Sync {
    /// `StoreError::NotFound` when no account has `id`.
    async fn get(&self, id: i32) -> Result<Account, StoreError>;
}

#[async_trait]
pub trait AccountWriter: Send + Sync {
    /// Persist a new account; the returned value carries the assigned id.
    async fn create(&self, account: Account) -> Result<Account, StoreError>;
    /// Replace every field but `id` and `created_at`.
    async fn update(&self, account: &Account) -> Result<Account, StoreError>;
    async fn delete(&self, account: &Account) -> Result<(), StoreError>;
}

#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// One page of matching accounts plus the total number of matches.
    async fn list(&self, filter: &AccountFilter) -> Result<(Vec<Account>, u64), StoreError>;
}

#[async_trait]
pub trait AccountSnapshot: Send + Sync {
    /// Every account, ordered by id.
    async fn list_only(&self) -> Result<Vec<Account>, StoreError>;
}

/// Full set used by the account façade.
pub trait AccountStore: AccountQuery + AccountLookup + AccountWriter {}

impl<T> AccountStore for T where T: AccountQuery + AccountLookup + AccountWriter {}

/// Set used by the enveloped name façade.
pub trait NameStore: AccountSnapshot + AccountLookup + AccountWriter {}

impl<T> NameStore for T where T: AccountSnapshot + AccountLookup + AccountWriter {}

/// Read-only set used by the name array façade.
pub trait NameAryStore: AccountSnapshot {}

impl<T> NameAryStore for T where T: AccountSnapshot {}
