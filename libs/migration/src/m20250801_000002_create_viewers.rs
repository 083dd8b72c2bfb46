use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Viewers::Table)
                    .if_not_exists()
                    .col(pk_auto(Viewers::Id))
                    .col(string(Viewers::Email))
                    .col(integer(Viewers::EventId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_viewers_event_id")
                            .from(Viewers::Table, Viewers::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The existence check runs on the (email, event_id) pair; the unique
        // index doubles as its lookup path.
        manager
            .create_index(
                Index::create()
                    .name("idx_viewers_email_event_id")
                    .table(Viewers::Table)
                    .col(Viewers::Email)
                    .col(Viewers::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Viewers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Viewers {
    Table,
    Id,
    Email,
    EventId,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
}
