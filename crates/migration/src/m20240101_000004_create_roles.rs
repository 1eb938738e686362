//! Create `roles` table: one row per (employee, role_type).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(uuid(Roles::Id).primary_key())
                    .col(uuid(Roles::EmployeeId).not_null())
                    .col(string_len(Roles::RoleType, 32).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_roles_employee")
                            .from(Roles::Table, Roles::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Roles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Roles { Table, Id, EmployeeId, RoleType }

#[derive(DeriveIden)]
enum Employee { Table, Id }
