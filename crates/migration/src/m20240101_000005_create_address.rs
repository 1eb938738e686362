//! Create `address` table; one address per employee, each in a country.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(uuid(Address::Id).primary_key())
                    .col(uuid(Address::EmployeeId).unique_key().not_null())
                    .col(string_len(Address::Street, 255).not_null())
                    .col(string_len(Address::City, 128).not_null())
                    .col(ColumnDef::new(Address::PostCode).string_len(32).null())
                    .col(uuid(Address::CountryId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_employee")
                            .from(Address::Table, Address::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_country")
                            .from(Address::Table, Address::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address { Table, Id, EmployeeId, Street, City, PostCode, CountryId }

#[derive(DeriveIden)]
enum Employee { Table, Id }

#[derive(DeriveIden)]
enum Country { Table, Id }
