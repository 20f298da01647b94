// src/service/department_service.rs

use crate::api::dto::department_dto::{
    AboutSectionDto, BannerDto, BenefitDto, ContactDto, CtaDto, CurriculumDto,
    DepartmentDetailDto, DepartmentListResponse, DepartmentSummaryDto, FacilityDto,
    FacilityListResponse, PoPsoPeoDto, ProgramDto, ProgramListResponse, QuickLinkDto,
};
use crate::db::DbPool;
use crate::domain::{
    banner_model, benefit_model, cta_model, curriculum_model, department_contact_model,
    department_model, facility_model, po_pso_peo_model, program_offered_model, quick_link_model,
};
use crate::error::{AppError, AppResult};
use crate::repository::department_repository::DepartmentRepository;
use crate::utils::media_url::MediaUrlResolver;
use std::sync::Arc;
use tracing::debug;

pub struct DepartmentService {
    repo: Arc<DepartmentRepository>,
    media: MediaUrlResolver,
}

impl DepartmentService {
    pub fn new(db_pool: DbPool, media: MediaUrlResolver) -> Self {
        Self {
            repo: Arc::new(DepartmentRepository::new(db_pool)),
            media,
        }
    }

    // 存在しない学科IDは NotFound (404)
    async fn require_department(&self, department_id: i64) -> AppResult<department_model::Model> {
        self.repo
            .find_by_id(department_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Department with id {} not found", department_id))
            })
    }

    pub async fn list_departments(&self) -> AppResult<DepartmentListResponse> {
        let departments = self.repo.find_all().await?;

        Ok(DepartmentListResponse {
            departments: departments
                .into_iter()
                .map(DepartmentSummaryDto::from)
                .collect(),
        })
    }

    /// 学科の全情報を取得
    ///
    /// 関連コレクションはすべて学科IDで絞り込み、1リクエスト内で順番に問い合わせる。
    pub async fn get_department_detail(&self, department_id: i64) -> AppResult<DepartmentDetailDto> {
        let department = self.require_department(department_id).await?;
        let media = &self.media;

        let about_sections = self
            .repo
            .find_about_sections_with_numbers(department.id)
            .await?
            .into_iter()
            .map(|(section, numbers)| AboutSectionDto::from_model(section, numbers, media))
            .collect();

        let quick_links = self
            .repo
            .find_owned_by::<quick_link_model::Entity>(department.id)
            .await?
            .into_iter()
            .map(QuickLinkDto::from)
            .collect();

        let programs = self
            .repo
            .find_owned_by::<program_offered_model::Entity>(department.id)
            .await?
            .into_iter()
            .map(|m| ProgramDto::from_model(m, media))
            .collect();

        let curriculum = self
            .repo
            .find_owned_by::<curriculum_model::Entity>(department.id)
            .await?
            .into_iter()
            .map(|m| CurriculumDto::from_model(m, media))
            .collect();

        let benefits = self
            .repo
            .find_owned_by::<benefit_model::Entity>(department.id)
            .await?
            .into_iter()
            .map(|m| BenefitDto::from_model(m, media))
            .collect();

        let contacts = self
            .repo
            .find_owned_by::<department_contact_model::Entity>(department.id)
            .await?
            .into_iter()
            .map(|m| ContactDto::from_model(m, media))
            .collect();

        let ctas = self
            .repo
            .find_owned_by::<cta_model::Entity>(department.id)
            .await?
            .into_iter()
            .map(CtaDto::from)
            .collect();

        let po_pso_peo = self
            .repo
            .find_owned_by::<po_pso_peo_model::Entity>(department.id)
            .await?
            .into_iter()
            .map(PoPsoPeoDto::from)
            .collect();

        let facilities = self
            .repo
            .find_owned_by::<facility_model::Entity>(department.id)
            .await?
            .into_iter()
            .map(|m| FacilityDto::from_model(m, media))
            .collect();

        let banners = self
            .repo
            .find_owned_by::<banner_model::Entity>(department.id)
            .await?
            .into_iter()
            .map(|m| BannerDto::from_model(m, media))
            .collect();

        debug!(department_id = department.id, "Department detail assembled");

        Ok(DepartmentDetailDto {
            id: department.id,
            name: department.name,
            ug: department.ug,
            pg: department.pg,
            phd: department.phd,
            vision: department.vision,
            mission: department.mission,
            about_sections,
            quick_links,
            programs,
            curriculum,
            benefits,
            contacts,
            ctas,
            po_pso_peo,
            facilities,
            banners,
        })
    }

    pub async fn get_department_programs(
        &self,
        department_id: i64,
    ) -> AppResult<ProgramListResponse> {
        let department = self.require_department(department_id).await?;
        let programs = self
            .repo
            .find_owned_by::<program_offered_model::Entity>(department.id)
            .await?;

        Ok(ProgramListResponse {
            programs: programs
                .into_iter()
                .map(|m| ProgramDto::from_model(m, &self.media))
                .collect(),
        })
    }

    pub async fn get_department_facilities(
        &self,
        department_id: i64,
    ) -> AppResult<FacilityListResponse> {
        let department = self.require_department(department_id).await?;
        let facilities = self
            .repo
            .find_owned_by::<facility_model::Entity>(department.id)
            .await?;

        Ok(FacilityListResponse {
            facilities: facilities
                .into_iter()
                .map(|m| FacilityDto::from_model(m, &self.media))
                .collect(),
        })
    }
}
