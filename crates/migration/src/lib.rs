//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_country;
mod m20240101_000002_create_office;
mod m20240101_000003_create_employee;
mod m20240101_000004_create_roles;
mod m20240101_000005_create_address;
mod m20240101_000006_create_issue;
mod m20240101_000007_create_comment;
mod m20240101_000008_create_comment_employee;
mod m20240101_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_country::Migration),
            Box::new(m20240101_000002_create_office::Migration),
            Box::new(m20240101_000003_create_employee::Migration),
            Box::new(m20240101_000004_create_roles::Migration),
            Box::new(m20240101_000005_create_address::Migration),
            Box::new(m20240101_000006_create_issue::Migration),
            Box::new(m20240101_000007_create_comment::Migration),
            Box::new(m20240101_000008_create_comment_employee::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000009_add_indexes::Migration),
        ]
    }
}
