//! Create `employee` table.
//!
//! `email` is the login identity and therefore unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(uuid(Employee::Id).primary_key())
                    .col(string_len(Employee::FullName, 128).not_null())
                    .col(string_len(Employee::Email, 255).unique_key().not_null())
                    .col(string_len(Employee::Password, 255).not_null())
                    .col(ColumnDef::new(Employee::PhoneNumber).string_len(32).null())
                    .col(ColumnDef::new(Employee::Position).string_len(128).null())
                    .col(ColumnDef::new(Employee::Avatar).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, Id, FullName, Email, Password, PhoneNumber, Position, Avatar }
