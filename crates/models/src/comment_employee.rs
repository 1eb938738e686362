use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{comment, employee};

/// One upvote: at most one row per (comment, employee).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment_employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub comment_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Comment, Employee }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Comment => Entity::belongs_to(comment::Entity).from(Column::CommentId).to(comment::Column::Id).into(),
            Relation::Employee => Entity::belongs_to(employee::Entity).from(Column::EmployeeId).to(employee::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
