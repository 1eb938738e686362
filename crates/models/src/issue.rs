use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseBackend, FromQueryResult, Statement};
use serde::{Deserialize, Serialize};

use crate::{employee, office};

/// Status every freshly reported issue starts in.
pub const STATUS_OPEN: &str = "open";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "issue")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub status: String,
    pub start_time: DateTimeWithTimeZone,
    pub finish_time: Option<DateTimeWithTimeZone>,
    pub employee_id: Uuid,
    pub office_id: Uuid,
    pub rating: i32,
    pub comment_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Reporter, Office }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Reporter => Entity::belongs_to(employee::Entity).from(Column::EmployeeId).to(employee::Column::Id).into(),
            Relation::Office => Entity::belongs_to(office::Entity).from(Column::OfficeId).to(office::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Issue row joined with its reporter's display fields and office name.
///
/// Joined columns are `None` when the referenced row is missing.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize, Deserialize)]
pub struct IssueDetails {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: String,
    pub start_time: DateTimeWithTimeZone,
    pub finish_time: Option<DateTimeWithTimeZone>,
    pub employee_id: Uuid,
    pub office_id: Uuid,
    pub rating: i32,
    pub comment_count: i32,
    pub reporter_name: Option<String>,
    pub reporter_avatar: Option<String>,
    pub office_name: Option<String>,
}

const DETAILS_SQL: &str = "SELECT i.id, i.name, i.description, i.status, i.start_time, i.finish_time, \
     i.employee_id, i.office_id, i.rating, i.comment_count, \
     e.full_name AS reporter_name, e.avatar AS reporter_avatar, o.name AS office_name \
     FROM issue i \
     LEFT JOIN employee e ON i.employee_id = e.id \
     LEFT JOIN office o ON i.office_id = o.id \
     WHERE i.id = $1";

pub async fn find_details<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<IssueDetails>, DbErr> {
    IssueDetails::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        DETAILS_SQL,
        [id.into()],
    ))
    .one(db)
    .await
}

impl From<Model> for IssueDetails {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            status: m.status,
            start_time: m.start_time,
            finish_time: m.finish_time,
            employee_id: m.employee_id,
            office_id: m.office_id,
            rating: m.rating,
            comment_count: m.comment_count,
            reporter_name: None,
            reporter_avatar: None,
            office_name: None,
        }
    }
}
