// src/domain/number_data_model.rs
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "base_numberdata")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub about_department_id: i64,
    pub number: i32,
    pub symbol: String,
    pub text: String,
    pub featured: bool,
    pub unique_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::about_department_model::Entity",
        from = "Column::AboutDepartmentId",
        to = "super::about_department_model::Column::Id",
        on_delete = "Cascade"
    )]
    AboutDepartment,
}

impl Related<super::about_department_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AboutDepartment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
