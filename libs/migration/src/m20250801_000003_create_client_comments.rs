use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientComments::Table)
                    .if_not_exists()
                    .col(pk_auto(ClientComments::Id))
                    .col(string(ClientComments::Email))
                    .col(text(ClientComments::Comment))
                    .col(boolean(ClientComments::Replied).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_client_comments_email")
                    .table(ClientComments::Table)
                    .col(ClientComments::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClientComments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ClientComments {
    Table,
    Id,
    Email,
    Comment,
    Replied,
}
