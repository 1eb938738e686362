use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseBackend, FromQueryResult, Statement};
use serde::{Deserialize, Serialize};

use crate::{employee, issue};

/// Write-side comment row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub text: String,
    pub time: DateTimeWithTimeZone,
    pub likes: i32,
    pub parent_id: Option<Uuid>,
    pub issue_id: Uuid,
    pub employee_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Issue, Author, Parent }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Issue => Entity::belongs_to(issue::Entity).from(Column::IssueId).to(issue::Column::Id).into(),
            Relation::Author => Entity::belongs_to(employee::Entity).from(Column::EmployeeId).to(employee::Column::Id).into(),
            Relation::Parent => Entity::belongs_to(Entity).from(Column::ParentId).to(Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Author fields shown next to a comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub avatar: Option<String>,
}

/// Read model: a comment with its author projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentWithAuthor {
    pub id: Uuid,
    pub text: String,
    pub time: DateTimeWithTimeZone,
    pub likes: i32,
    pub parent_id: Option<Uuid>,
    pub issue_id: Uuid,
    pub employee_id: Uuid,
    pub author: Option<CommentAuthor>,
}

#[derive(Debug, FromQueryResult)]
struct CommentWithAuthorRow {
    id: Uuid,
    text: String,
    time: DateTimeWithTimeZone,
    likes: i32,
    parent_id: Option<Uuid>,
    issue_id: Uuid,
    employee_id: Uuid,
    author_id: Option<Uuid>,
    author_full_name: Option<String>,
    author_avatar: Option<String>,
}

impl From<CommentWithAuthorRow> for CommentWithAuthor {
    fn from(r: CommentWithAuthorRow) -> Self {
        let author = r.author_id.map(|id| CommentAuthor { id, full_name: r.author_full_name, avatar: r.author_avatar });
        Self {
            id: r.id,
            text: r.text,
            time: r.time,
            likes: r.likes,
            parent_id: r.parent_id,
            issue_id: r.issue_id,
            employee_id: r.employee_id,
            author,
        }
    }
}

impl CommentWithAuthor {
    /// Pair a stored comment with an optional author row.
    pub fn compose(c: Model, author: Option<&employee::Model>) -> Self {
        Self {
            id: c.id,
            text: c.text,
            time: c.time,
            likes: c.likes,
            parent_id: c.parent_id,
            issue_id: c.issue_id,
            employee_id: c.employee_id,
            author: author.map(|e| CommentAuthor { id: e.id, full_name: Some(e.full_name.clone()), avatar: e.avatar.clone() }),
        }
    }
}

const WITH_AUTHOR_SELECT: &str = "SELECT c.id, c.text, c.time, c.likes, c.parent_id, c.issue_id, c.employee_id, \
     e.id AS author_id, e.full_name AS author_full_name, e.avatar AS author_avatar \
     FROM comment c \
     LEFT JOIN employee e ON c.employee_id = e.id";

pub async fn find_with_author_by_issue<C: ConnectionTrait>(db: &C, issue_id: Uuid) -> Result<Vec<CommentWithAuthor>, DbErr> {
    let sql = format!("{WITH_AUTHOR_SELECT} WHERE c.issue_id = $1 ORDER BY c.time ASC");
    let rows = CommentWithAuthorRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        sql,
        [issue_id.into()],
    ))
    .all(db)
    .await?;
    Ok(rows.into_iter().map(CommentWithAuthor::from).collect())
}

pub async fn find_with_author_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<CommentWithAuthor>, DbErr> {
    let sql = format!("{WITH_AUTHOR_SELECT} WHERE c.id = $1");
    let row = CommentWithAuthorRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        sql,
        [id.into()],
    ))
    .one(db)
    .await?;
    Ok(row.map(CommentWithAuthor::from))
}
