//! Service layer for account administration.
//! - Owns the `Account` domain type and its validation rules.
//! - Defines the capability traits the HTTP resources depend on.
//! - Provides the SeaORM and in-memory store implementations.

pub mod accounts;
pub mod errors;
pub mod pagination;
#[cfg(test)]
pub mod test_support;
