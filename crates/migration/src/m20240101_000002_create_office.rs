//! Create `office` table with FK to `country`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Office::Table)
                    .if_not_exists()
                    .col(uuid(Office::Id).primary_key())
                    .col(string_len(Office::Name, 128).not_null())
                    .col(uuid(Office::CountryId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_office_country")
                            .from(Office::Table, Office::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Office::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Office { Table, Id, Name, CountryId }

#[derive(DeriveIden)]
enum Country { Table, Id }
