use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::accounts::domain::{Account, DEFAULT_ROLE};
use crate::accounts::filter::AccountFilter;
use crate::accounts::store::{AccountLookup, AccountQuery, AccountSnapshot, AccountWriter};
use crate::errors::StoreError;

#[derive(Default)]
struct State {
    last_id: i32,
    accounts: BTreeMap<i32, Account>,
}

impl State {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.accounts
            .values()
            .any(|a| Some(a.id) != except && a.email.eq_ignore_ascii_case(email))
    }

    fn insert_new(&mut self, mut account: Account) -> Account {
        self.last_id += 1;
        let now = Utc::now();
        account.id = self.last_id;
        if account.roles.is_empty() {
            account.roles.push(DEFAULT_ROLE.to_string());
        }
        account.created_at = Some(now);
        account.updated_at = Some(now);
        self.accounts.insert(account.id, account.clone());
        account
    }
}

/// Process-local account store.
///
/// Applies the same validation and uniqueness rules as the database store
/// and counts every call made through the store traits.
#[derive(Default)]
pub struct MemoryAccountStore {
    state: RwLock<State>,
    calls: AtomicUsize,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store. Ids are reassigned in iteration order; seeding
    /// does not count as calls.
    ///
    /// ```
    /// use service::accounts::{Account, AccountLookup};
    /// use service::accounts::repo::MemoryAccountStore;
    ///
    /// let store = MemoryAccountStore::with_accounts([Account::new("Ann", "ann@example.com")]);
    /// let ann = tokio_test::block_on(store.get(1)).unwrap();
    /// assert_eq!(ann.roles, vec!["user".to_string()]);
    /// assert_eq!(store.calls(), 1);
    /// ```
    pub fn with_accounts<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = Account>,
    {
        let mut state = State::default();
        for account in accounts {
            state.insert_new(account);
        }
        Self { state: RwLock::new(state), calls: AtomicUsize::new(0) }
    }

    /// Number of store trait calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, op: &'static str) {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(op, calls = n, "memory account store call");
    }
}

#[async_trait]
impl AccountLookup for MemoryAccountStore {
    async fn get(&self, id: i32) -> Result<Account, StoreError> {
        self.record("get");
        let state = self.state.read().await;
        state.accounts.get(&id).cloned().ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl AccountWriter for MemoryAccountStore {
    async fn create(&self, account: Account) -> Result<Account, StoreError> {
        self.record("create");
        account.validate()?;
        let mut state = self.state.write().await;
        if state.email_taken(&account.email, None) {
            return Err(StoreError::field("email", "email already registered"));
        }
        Ok(state.insert_new(account))
    }

    async fn update(&self, account: &Account) -> Result<Account, StoreError> {
        self.record("update");
        account.validate()?;
        let mut state = self.state.write().await;
        if state.email_taken(&account.email, Some(account.id)) {
            return Err(StoreError::field("email", "email already registered"));
        }
        let stored = state.accounts.get_mut(&account.id).ok_or(StoreError::NotFound)?;
        let created_at = stored.created_at;
        *stored = Account { created_at, updated_at: Some(Utc::now()), ..account.clone() };
        Ok(stored.clone())
    }

    async fn delete(&self, account: &Account) -> Result<(), StoreError> {
        self.record("delete");
        let mut state = self.state.write().await;
        state.accounts.remove(&account.id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl AccountQuery for MemoryAccountStore {
    async fn list(&self, filter: &AccountFilter) -> Result<(Vec<Account>, u64), StoreError> {
        self.record("list");
        let state = self.state.read().await;
        let mut matched: Vec<&Account> = state.accounts.values().filter(|a| filter.matches(a)).collect();
        matched.sort_by(|a, b| filter.compare(a, b));
        let total = matched.len() as u64;
        let (_, per_page) = filter.pagination.normalize();
        let page = matched
            .into_iter()
            .skip(filter.pagination.offset() as usize)
            .take(per_page as usize)
            .cloned()
            .collect();
        Ok((page, total))
    }
}

#[async_trait]
impl AccountSnapshot for MemoryAccountStore {
    async fn list_only(&self) -> Result<Vec<Account>, StoreError> {
        self.record("list_only");
        let state = self.state.read().await;
        Ok(state.accounts.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MemoryAccountStore {
        MemoryAccountStore::with_accounts([
            Account::new("alice", "alice@example.com"),
            Account::new("bob", "bob@example.com"),
            Account::new("carol", "carol@example.com"),
        ])
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_and_defaults() {
        let store = MemoryAccountStore::new();
        let a = store.create(Account::new("a", "a@example.com")).await.unwrap();
        let b = store.create(Account::new("b", "b@example.com")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(a.roles, vec!["user".to_string()]);
        assert!(a.created_at.is_some());
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn create_rejects_invalid_and_duplicate() {
        let store = seeded();
        let err = store.create(Account::new("", "bad")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref f) if f.len() == 2));

        let err = store.create(Account::new("dup", "ALICE@example.com")).await.unwrap_err();
        assert_eq!(err, StoreError::field("email", "email already registered"));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = seeded();
        assert_eq!(store.get(99).await.unwrap_err(), StoreError::NotFound);
        assert_eq!(store.get(2).await.unwrap().name, "bob");
    }

    #[tokio::test]
    async fn update_keeps_id_and_created_at() {
        let store = seeded();
        let mut acc = store.get(1).await.unwrap();
        let created_at = acc.created_at;
        acc.name = "alicia".into();
        acc.created_at = None;
        let updated = store.update(&acc).await.unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "alicia");
        assert_eq!(updated.created_at, created_at);
        assert_eq!(store.get(1).await.unwrap().name, "alicia");
    }

    #[tokio::test]
    async fn update_unknown_account_is_not_found() {
        let store = seeded();
        let ghost = Account { id: 42, ..Account::new("ghost", "ghost@example.com") };
        assert_eq!(store.update(&ghost).await.unwrap_err(), StoreError::NotFound);
    }

    #[tokio::test]
    async fn delete_removes_once() {
        let store = seeded();
        let acc = store.get(3).await.unwrap();
        store.delete(&acc).await.unwrap();
        assert_eq!(store.delete(&acc).await.unwrap_err(), StoreError::NotFound);
        assert_eq!(store.list_only().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_counts_all_matches_independent_of_page() {
        let store = seeded();
        let filter = AccountFilter::from_params([("limit", "2"), ("page", "2")]).unwrap();
        let (page, total) = store.list(&filter).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), vec!["carol"]);

        let filter = AccountFilter::from_params([("order", "-name"), ("email", "example")]).unwrap();
        let (page, total) = store.list(&filter).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page[0].name, "carol");
    }

    #[tokio::test]
    async fn seeding_is_not_counted() {
        let store = seeded();
        assert_eq!(store.calls(), 0);
        let _ = store.list_only().await.unwrap();
        assert_eq!(store.calls(), 1);
    }
}
