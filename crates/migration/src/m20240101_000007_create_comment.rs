//! Create `comment` table; threaded through the nullable self-referencing `parent_id`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(uuid(Comment::Id).primary_key())
                    .col(text(Comment::Text).not_null())
                    .col(timestamp_with_time_zone(Comment::Time).not_null())
                    .col(integer(Comment::Likes).not_null().default(0))
                    .col(ColumnDef::new(Comment::ParentId).uuid().null())
                    .col(uuid(Comment::IssueId).not_null())
                    .col(uuid(Comment::EmployeeId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_issue")
                            .from(Comment::Table, Comment::IssueId)
                            .to(Issue::Table, Issue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_parent")
                            .from(Comment::Table, Comment::ParentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Comment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Comment { Table, Id, Text, Time, Likes, ParentId, IssueId, EmployeeId }

#[derive(DeriveIden)]
enum Issue { Table, Id }
