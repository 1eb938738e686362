#![cfg(test)]
use chrono::Utc;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use models::role::RoleType;
use models::{address, country, employee, issue, office, role};
use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel};
use tokio::sync::OnceCell;
use uuid::Uuid;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// `None` when no database is configured or `SKIP_DB_TESTS` is set.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    MIGRATED
        .get_or_try_init(|| async {
            let cfg = DatabaseConfig::from_env();
            let db = connect_with_config(&cfg).await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Fresh connection for the current test's runtime
    let mut cfg = DatabaseConfig::from_env();
    cfg.min_connections = cfg.min_connections.min(1);
    Ok(Some(connect_with_config(&cfg).await?))
}

/// One employee living in a country with one office; every name is unique per call.
pub struct Seeded {
    pub country: country::Model,
    pub office: office::Model,
    pub employee: employee::Model,
    pub address: address::Model,
}

pub async fn seed_employee(db: &DatabaseConnection, roles: &[RoleType]) -> Result<Seeded, anyhow::Error> {
    let tag = Uuid::new_v4().simple().to_string();
    let country = country::Model { id: Uuid::new_v4(), name: format!("country_{tag}") }
        .into_active_model()
        .reset_all()
        .insert(db)
        .await?;
    let office = office::Model { id: Uuid::new_v4(), name: format!("office_{tag}"), country_id: country.id }
        .into_active_model()
        .reset_all()
        .insert(db)
        .await?;
    let employee = seed_person(db, country.id, roles, &tag).await?;
    let address = address_of(db, employee.id).await?;
    Ok(Seeded { country, office, employee, address })
}

/// Another employee with an address in `country_id`.
pub async fn seed_person(db: &DatabaseConnection, country_id: Uuid, roles: &[RoleType], tag: &str) -> Result<employee::Model, anyhow::Error> {
    let employee = employee::Model {
        id: Uuid::new_v4(),
        full_name: format!("Employee {tag}"),
        email: format!("{tag}_{}@office.test", Uuid::new_v4().simple()),
        password: "{noop}secret".into(),
        phone_number: None,
        position: Some("Engineer".into()),
        avatar: None,
    }
    .into_active_model()
    .reset_all()
    .insert(db)
    .await?;
    address::Model {
        id: Uuid::new_v4(),
        employee_id: employee.id,
        street: "Konstitucijos pr. 7".into(),
        city: "Vilnius".into(),
        post_code: None,
        country_id,
    }
    .into_active_model()
    .reset_all()
    .insert(db)
    .await?;
    for r in roles {
        role::Model { id: Uuid::new_v4(), employee_id: employee.id, role_type: *r }
            .into_active_model()
            .reset_all()
            .insert(db)
            .await?;
    }
    Ok(employee)
}

async fn address_of(db: &DatabaseConnection, employee_id: Uuid) -> Result<address::Model, anyhow::Error> {
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
    address::Entity::find()
        .filter(address::Column::EmployeeId.eq(employee_id))
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("seeded address missing"))
}

pub fn new_issue(name: &str, status: &str, employee_id: Uuid, office_id: Uuid) -> issue::Model {
    issue::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: "seeded".into(),
        status: status.to_string(),
        start_time: Utc::now().into(),
        finish_time: None,
        employee_id,
        office_id,
        rating: 0,
        comment_count: 0,
    }
}
