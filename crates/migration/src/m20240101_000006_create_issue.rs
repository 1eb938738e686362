//! Create `issue` table.
//!
//! `name` is unique across all issues.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(uuid(Issue::Id).primary_key())
                    .col(string_len(Issue::Name, 255).unique_key().not_null())
                    .col(text(Issue::Description).not_null())
                    .col(string_len(Issue::Status, 32).not_null())
                    .col(timestamp_with_time_zone(Issue::StartTime).not_null())
                    .col(
                        ColumnDef::new(Issue::FinishTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(uuid(Issue::EmployeeId).not_null())
                    .col(uuid(Issue::OfficeId).not_null())
                    .col(integer(Issue::Rating).not_null().default(0))
                    .col(integer(Issue::CommentCount).not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_employee")
                            .from(Issue::Table, Issue::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_office")
                            .from(Issue::Table, Issue::OfficeId)
                            .to(Office::Table, Office::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Issue::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Issue {
    Table,
    Id,
    Name,
    Description,
    Status,
    StartTime,
    FinishTime,
    EmployeeId,
    OfficeId,
    Rating,
    CommentCount,
}

#[derive(DeriveIden)]
enum Employee { Table, Id }

#[derive(DeriveIden)]
enum Office { Table, Id }
