use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::country;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "office")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub country_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Country }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Country => Entity::belongs_to(country::Entity).from(Column::CountryId).to(country::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}
