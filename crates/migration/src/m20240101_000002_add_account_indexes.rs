use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // name filter + ordering on the admin list endpoint
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_account_name")
                    .table(Account::Table)
                    .col(Account::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_account_created_at")
                    .table(Account::Table)
                    .col(Account::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_account_created_at").table(Account::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_account_name").table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Account { Table, Name, CreatedAt }
