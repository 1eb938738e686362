use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Issue listings filter by status, reporter and office
        manager
            .create_index(
                Index::create()
                    .name("idx_issue_status")
                    .table(Issue::Table)
                    .col(Issue::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_issue_employee")
                    .table(Issue::Table)
                    .col(Issue::EmployeeId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_issue_office")
                    .table(Issue::Table)
                    .col(Issue::OfficeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comment_issue")
                    .table(Comment::Table)
                    .col(Comment::IssueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_roles_employee_role")
                    .table(Roles::Table)
                    .col(Roles::EmployeeId)
                    .col(Roles::RoleType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_issue_status").table(Issue::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_issue_employee").table(Issue::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_issue_office").table(Issue::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comment_issue").table(Comment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_roles_employee_role").table(Roles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Issue { Table, Status, EmployeeId, OfficeId }

#[derive(DeriveIden)]
enum Comment { Table, IssueId }

#[derive(DeriveIden)]
enum Roles { Table, EmployeeId, RoleType }
