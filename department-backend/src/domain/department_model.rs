// src/domain/department_model.rs
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 学科（集約ルート）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "base_department")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub ug: bool,
    pub pg: bool,
    pub phd: bool,
    #[sea_orm(column_type = "Text")]
    pub vision: String,
    #[sea_orm(column_type = "Text")]
    pub mission: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::about_department_model::Entity")]
    AboutSections,
    #[sea_orm(has_many = "super::quick_link_model::Entity")]
    QuickLinks,
    #[sea_orm(has_many = "super::program_offered_model::Entity")]
    Programs,
    #[sea_orm(has_many = "super::curriculum_model::Entity")]
    Curriculum,
    #[sea_orm(has_many = "super::benefit_model::Entity")]
    Benefits,
    #[sea_orm(has_many = "super::department_contact_model::Entity")]
    Contacts,
    #[sea_orm(has_many = "super::cta_model::Entity")]
    Ctas,
    #[sea_orm(has_many = "super::po_pso_peo_model::Entity")]
    PoPsoPeo,
    #[sea_orm(has_many = "super::facility_model::Entity")]
    Facilities,
    #[sea_orm(has_many = "super::banner_model::Entity")]
    Banners,
}

impl Related<super::about_department_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AboutSections.def()
    }
}

impl Related<super::quick_link_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuickLinks.def()
    }
}

impl Related<super::program_offered_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Programs.def()
    }
}

impl Related<super::curriculum_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curriculum.def()
    }
}

impl Related<super::benefit_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Benefits.def()
    }
}

impl Related<super::department_contact_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contacts.def()
    }
}

impl Related<super::cta_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ctas.def()
    }
}

impl Related<super::po_pso_peo_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PoPsoPeo.def()
    }
}

impl Related<super::facility_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facilities.def()
    }
}

impl Related<super::banner_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Banners.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
