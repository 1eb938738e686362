//! Create `comment_employee` upvote association.
//!
//! The composite primary key allows one vote per (comment, employee).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommentEmployee::Table)
                    .if_not_exists()
                    .col(uuid(CommentEmployee::CommentId).not_null())
                    .col(uuid(CommentEmployee::EmployeeId).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_comment_employee")
                            .col(CommentEmployee::CommentId)
                            .col(CommentEmployee::EmployeeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_employee_comment")
                            .from(CommentEmployee::Table, CommentEmployee::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_employee_employee")
                            .from(CommentEmployee::Table, CommentEmployee::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommentEmployee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CommentEmployee { Table, CommentId, EmployeeId }

#[derive(DeriveIden)]
enum Comment { Table, Id }

#[derive(DeriveIden)]
enum Employee { Table, Id }
