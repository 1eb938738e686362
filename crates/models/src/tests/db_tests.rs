use crate::db::connect;
use crate::{address, comment, comment_employee, country, employee, issue, office, role};
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};
use anyhow::Result;
use uuid::Uuid;

static MIGRATED: tokio::sync::OnceCell<()> = tokio::sync::OnceCell::const_new();

/// Connect and migrate, or `None` when no database is configured.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect().await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    Ok(Some(connect().await?))
}

struct Fixture {
    country: country::Model,
    office: office::Model,
    employee: employee::Model,
}

async fn seed(db: &DatabaseConnection) -> Result<Fixture> {
    let country = country::Model { id: Uuid::new_v4(), name: format!("country_{}", Uuid::new_v4()) }
        .into_active_model()
        .reset_all()
        .insert(db)
        .await?;
    let office = office::Model { id: Uuid::new_v4(), name: "Vilnius HQ".into(), country_id: country.id }
        .into_active_model()
        .reset_all()
        .insert(db)
        .await?;
    let employee = employee::Model {
        id: Uuid::new_v4(),
        full_name: "Test Employee".into(),
        email: format!("emp_{}@example.com", Uuid::new_v4()),
        password: "pw".into(),
        phone_number: None,
        position: None,
        avatar: Some("avatar.png".into()),
    }
    .into_active_model()
    .reset_all()
    .insert(db)
    .await?;
    Ok(Fixture { country, office, employee })
}

async fn cleanup(db: &DatabaseConnection, f: &Fixture) -> Result<()> {
    employee::Entity::delete_by_id(f.employee.id).exec(db).await?;
    office::Entity::delete_by_id(f.office.id).exec(db).await?;
    country::Entity::delete_by_id(f.country.id).exec(db).await?;
    Ok(())
}

/// Issue details carry reporter and office columns from the outer joins
#[tokio::test]
async fn test_issue_details_projection() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let f = seed(&db).await?;

    let created = issue::Model {
        id: Uuid::new_v4(),
        name: format!("issue_{}", Uuid::new_v4()),
        description: "Coffee machine leaks".into(),
        status: issue::STATUS_OPEN.into(),
        start_time: Utc::now().into(),
        finish_time: None,
        employee_id: f.employee.id,
        office_id: f.office.id,
        rating: 0,
        comment_count: 0,
    }
    .into_active_model()
    .reset_all()
    .insert(&db)
    .await?;

    let details = issue::find_details(&db, created.id).await?.expect("details");
    assert_eq!(details.reporter_name.as_deref(), Some("Test Employee"));
    assert_eq!(details.office_name.as_deref(), Some("Vilnius HQ"));
    assert!(issue::find_details(&db, Uuid::new_v4()).await?.is_none());

    issue::Entity::delete_by_id(created.id).exec(&db).await?;
    cleanup(&db, &f).await
}

/// Comment projection, upvote composite key and cascade on issue delete
#[tokio::test]
async fn test_comment_with_author_and_votes() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let f = seed(&db).await?;

    let is = issue::Model {
        id: Uuid::new_v4(),
        name: format!("issue_{}", Uuid::new_v4()),
        description: "Door badge reader offline".into(),
        status: issue::STATUS_OPEN.into(),
        start_time: Utc::now().into(),
        finish_time: None,
        employee_id: f.employee.id,
        office_id: f.office.id,
        rating: 0,
        comment_count: 0,
    }
    .into_active_model()
    .reset_all()
    .insert(&db)
    .await?;

    let c = comment::Model {
        id: Uuid::new_v4(),
        text: "Same on floor 2".into(),
        time: Utc::now().into(),
        likes: 0,
        parent_id: None,
        issue_id: is.id,
        employee_id: f.employee.id,
    }
    .into_active_model()
    .reset_all()
    .insert(&db)
    .await?;

    let listed = comment::find_with_author_by_issue(&db, is.id).await?;
    assert_eq!(listed.len(), 1);
    let author = listed[0].author.as_ref().expect("author");
    assert_eq!(author.full_name.as_deref(), Some("Test Employee"));

    let vote = comment_employee::Model { comment_id: c.id, employee_id: f.employee.id };
    vote.clone().into_active_model().reset_all().insert(&db).await?;
    // second identical vote violates the composite primary key
    assert!(vote.into_active_model().reset_all().insert(&db).await.is_err());

    role::Model { id: Uuid::new_v4(), employee_id: f.employee.id, role_type: role::RoleType::Admin }
        .into_active_model()
        .reset_all()
        .insert(&db)
        .await?;

    let addr = address::Model {
        id: Uuid::new_v4(),
        employee_id: f.employee.id,
        street: "Gedimino pr. 1".into(),
        city: "Vilnius".into(),
        post_code: None,
        country_id: f.country.id,
    }
    .into_active_model()
    .reset_all()
    .insert(&db)
    .await?;
    assert_eq!(address::Entity::find_by_id(addr.id).one(&db).await?.map(|a| a.country_id), Some(f.country.id));

    issue::Entity::delete_by_id(is.id).exec(&db).await?;
    assert!(comment::Entity::find_by_id(c.id).one(&db).await?.is_none());
    assert!(comment::find_with_author_by_id(&db, c.id).await?.is_none());

    cleanup(&db, &f).await
}
