use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{country, employee};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employee_id: Uuid,
    pub street: String,
    pub city: String,
    pub post_code: Option<String>,
    pub country_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Employee, Country }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employee => Entity::belongs_to(employee::Entity).from(Column::EmployeeId).to(employee::Column::Id).into(),
            Relation::Country => Entity::belongs_to(country::Entity).from(Column::CountryId).to(country::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
