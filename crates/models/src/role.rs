use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::employee;

/// Authorization tag attached to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleType {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "USER")]
    User,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employee_id: Uuid,
    pub role_type: RoleType,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Employee }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Employee => Entity::belongs_to(employee::Entity).from(Column::EmployeeId).to(employee::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}
