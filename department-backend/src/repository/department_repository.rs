// src/repository/department_repository.rs
use crate::domain::about_department_model::{self, Entity as AboutDepartmentEntity};
use crate::domain::department_model::{self, Entity as DepartmentEntity};
use crate::domain::number_data_model::{self, Entity as NumberDataEntity};
use crate::domain::DepartmentOwned;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, Select};
use std::collections::HashMap;

/// 学科紹介セクションとその数値データ
pub type AboutSectionWithNumbers = (about_department_model::Model, Vec<number_data_model::Model>);

pub struct DepartmentRepository {
    db: DbConn,
}

impl DepartmentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<department_model::Model>, DbErr> {
        DepartmentEntity::find()
            .order_by_asc(department_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<department_model::Model>, DbErr> {
        DepartmentEntity::find_by_id(id).one(&self.db).await
    }

    /// 学科IDで絞り込むクエリ（並び順は主キー昇順）
    pub fn owned_by_query<E>(department_id: i64) -> Select<E>
    where
        E: DepartmentOwned,
    {
        E::find()
            .filter(E::department_column().eq(department_id))
            .order_by_asc(E::order_column())
    }

    /// 指定した学科に属する子エンティティを取得
    pub async fn find_owned_by<E>(&self, department_id: i64) -> Result<Vec<E::Model>, DbErr>
    where
        E: DepartmentOwned,
    {
        Self::owned_by_query::<E>(department_id).all(&self.db).await
    }

    /// 複数の学科紹介セクションに属する数値データをまとめて取得するクエリ
    pub fn numbers_for_sections_query(section_ids: Vec<i64>) -> Select<NumberDataEntity> {
        NumberDataEntity::find()
            .filter(number_data_model::Column::AboutDepartmentId.is_in(section_ids))
            .order_by_asc(number_data_model::Column::Id)
    }

    /// 学科紹介セクションを取得し、数値データを1回のクエリでまとめて紐付ける
    pub async fn find_about_sections_with_numbers(
        &self,
        department_id: i64,
    ) -> Result<Vec<AboutSectionWithNumbers>, DbErr> {
        let sections = self
            .find_owned_by::<AboutDepartmentEntity>(department_id)
            .await?;

        // セクションがなければ数値データの問い合わせは不要
        if sections.is_empty() {
            return Ok(Vec::new());
        }

        let section_ids: Vec<i64> = sections.iter().map(|s| s.id).collect();
        let numbers = Self::numbers_for_sections_query(section_ids)
            .all(&self.db)
            .await?;

        let mut grouped: HashMap<i64, Vec<number_data_model::Model>> = HashMap::new();
        for number in numbers {
            grouped
                .entry(number.about_department_id)
                .or_default()
                .push(number);
        }

        Ok(sections
            .into_iter()
            .map(|section| {
                let numbers = grouped.remove(&section.id).unwrap_or_default();
                (section, numbers)
            })
            .collect())
    }
}
