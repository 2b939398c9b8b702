//! Account administration: domain type, list filter, store contracts and
//! their implementations.

pub mod domain;
pub mod filter;
pub mod repo;
pub mod store;

pub use domain::Account;
pub use filter::AccountFilter;
pub use store::{
    AccountLookup, AccountQuery, AccountSnapshot, AccountStore, AccountWriter, NameAryStore,
    NameStore,
};
