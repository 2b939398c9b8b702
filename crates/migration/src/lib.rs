//! Migrator for the account admin schema. Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_account;
mod m20240101_000002_add_account_indexes;
mod m20240101_000003_add_account_email_lower_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_account::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000002_add_account_indexes::Migration),
            Box::new(m20240101_000003_add_account_email_lower_index::Migration),
        ]
    }
}
