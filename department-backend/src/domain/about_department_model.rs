// src/domain/about_department_model.rs
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::DepartmentOwned;

/// 学科紹介セクション。数値ハイライト（NumberData）を子に持つ
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "base_aboutdepartment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub department_id: i64,
    pub heading: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    // 未設定の場合はNULLまたは空文字列
    #[sea_orm(nullable)]
    pub image: Option<String>,
    pub alt: String,
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
    #[sea_orm(has_many = "super::number_data_model::Entity")]
    Numbers,
}

impl Related<super::department_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::number_data_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Numbers.def()
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
