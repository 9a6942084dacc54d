//! Create the `content` table.
//!
//! `author_id` is a flat reference to `users.id` with no foreign-key
//! constraint: rows pointing at an absent author are allowed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Content::Table)
                    .if_not_exists()
                    .col(pk_auto(Content::Id))
                    .col(string_len(Content::Title, 255).not_null())
                    .col(text(Content::Body).not_null())
                    .col(integer(Content::AuthorId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Content::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Content { Table, Id, Title, Body, AuthorId }
