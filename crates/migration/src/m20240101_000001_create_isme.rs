//! Create `isme` table.
//!
//! `name` carries the unique index that makes concurrent inserts of the same
//! name fail in the database. `id` only exists to give listings a stable
//! insertion order.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IsMe::Table)
                    .if_not_exists()
                    .col(pk_auto(IsMe::Id))
                    .col(string_len(IsMe::Name, 255).unique_key().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(IsMe::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum IsMe {
    #[sea_orm(iden = "isme")]
    Table,
    Id,
    Name,
}
