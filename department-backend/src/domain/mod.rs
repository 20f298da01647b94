// src/domain/mod.rs
pub mod about_department_model;
pub mod banner_model;
pub mod benefit_model;
pub mod cta_model;
pub mod curriculum_model;
pub mod department_contact_model;
pub mod department_model;
pub mod facility_model;
pub mod number_data_model;
pub mod po_pso_peo_model;
pub mod program_offered_model;
pub mod quick_link_model;

use sea_orm::EntityTrait;

/// 学科に外部キー（department_id）でぶら下がる子エンティティ
pub trait DepartmentOwned: EntityTrait {
    /// 所属学科を指す外部キー列
    fn department_column() -> Self::Column;

    /// 一覧取得時の並び順に使う列
    fn order_column() -> Self::Column;
}
