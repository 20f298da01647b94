// src/domain/benefit_model.rs
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::DepartmentOwned;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "base_benefit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub department_id: i64,
    // アイコン画像のファイルパス
    #[sea_orm(nullable)]
    pub icon: Option<String>,
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department_model::Entity",
        from = "Column::DepartmentId",
        to = "super::department_model::Column::Id",
        on_delete = "Cascade"
    )]
    Department,
}

impl Related<super::department_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl DepartmentOwned for Entity {
    fn department_column() -> Column {
        Column::DepartmentId
    }

    fn order_column() -> Column {
        Column::Id
    }
}
