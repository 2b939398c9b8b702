//! Create `account` table.
//!
//! `roles` is a text array defaulting to `{user}`; e-mail is unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string_len(Account::Email, 255).unique_key().not_null())
                    .col(string_len(Account::Name, 255).not_null())
                    .col(boolean(Account::Active).not_null().default(true))
                    .col(
                        ColumnDef::new(Account::Roles)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{user}'")),
                    )
                    .col(
                        ColumnDef::new(Account::LastLogin)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Account::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Account::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Account::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Account { Table, Id, Email, Name, Active, Roles, LastLogin, CreatedAt, UpdatedAt }
