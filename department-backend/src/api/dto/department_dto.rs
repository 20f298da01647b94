// src/api/dto/department_dto.rs

use crate::domain::{
    about_department_model, banner_model, benefit_model, cta_model, curriculum_model,
    department_contact_model, department_model, facility_model, number_data_model,
    po_pso_peo_model, program_offered_model, quick_link_model,
};
use crate::utils::media_url::MediaUrlResolver;
use serde::{Deserialize, Serialize};

// ファイル・画像フィールドは未設定なら null として出力する（キーは省略しない）

/// 学科一覧の1件分（基本項目のみ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummaryDto {
    pub id: i64,
    pub name: String,
    pub ug: bool,
    pub pg: bool,
    pub phd: bool,
}

impl From<department_model::Model> for DepartmentSummaryDto {
    fn from(model: department_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            ug: model.ug,
            pg: model.pg,
            phd: model.phd,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentListResponse {
    pub departments: Vec<DepartmentSummaryDto>,
}

/// 学科詳細（関連コレクションをすべて含む集約）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDetailDto {
    pub id: i64,
    pub name: String,
    pub ug: bool,
    pub pg: bool,
    pub phd: bool,
    pub vision: String,
    pub mission: String,
    pub about_sections: Vec<AboutSectionDto>,
    pub quick_links: Vec<QuickLinkDto>,
    pub programs: Vec<ProgramDto>,
    pub curriculum: Vec<CurriculumDto>,
    pub benefits: Vec<BenefitDto>,
    pub contacts: Vec<ContactDto>,
    pub ctas: Vec<CtaDto>,
    pub po_pso_peo: Vec<PoPsoPeoDto>,
    pub facilities: Vec<FacilityDto>,
    pub banners: Vec<BannerDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSectionDto {
    pub heading: String,
    pub content: String,
    pub image: Option<String>,
    pub alt: String,
    pub numbers: Vec<NumberDataDto>,
}

impl AboutSectionDto {
    pub fn from_model(
        section: about_department_model::Model,
        numbers: Vec<number_data_model::Model>,
        media: &MediaUrlResolver,
    ) -> Self {
        Self {
            image: media.resolve(section.image.as_deref()),
            heading: section.heading,
            content: section.content,
            alt: section.alt,
            numbers: numbers.into_iter().map(NumberDataDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberDataDto {
    pub number: i32,
    pub symbol: String,
    pub text: String,
    pub featured: bool,
    pub unique_id: String,
}

impl From<number_data_model::Model> for NumberDataDto {
    fn from(model: number_data_model::Model) -> Self {
        Self {
            number: model.number,
            symbol: model.symbol,
            text: model.text,
            featured: model.featured,
            unique_id: model.unique_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLinkDto {
    pub name: String,
    pub link: String,
}

impl From<quick_link_model::Model> for QuickLinkDto {
    fn from(model: quick_link_model::Model) -> Self {
        Self {
            name: model.name,
            link: model.link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDto {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub explore_link: String,
    pub apply_link: String,
}

impl ProgramDto {
    pub fn from_model(model: program_offered_model::Model, media: &MediaUrlResolver) -> Self {
        Self {
            image: media.resolve(model.image.as_deref()),
            name: model.name,
            description: model.description,
            explore_link: model.explore_link,
            apply_link: model.apply_link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramListResponse {
    pub programs: Vec<ProgramDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumDto {
    pub name: String,
    pub description: String,
    pub file: Option<String>,
}

impl CurriculumDto {
    pub fn from_model(model: curriculum_model::Model, media: &MediaUrlResolver) -> Self {
        Self {
            file: media.resolve(model.file.as_deref()),
            name: model.name,
            description: model.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitDto {
    pub icon: Option<String>,
    pub text: String,
}

impl BenefitDto {
    pub fn from_model(model: benefit_model::Model, media: &MediaUrlResolver) -> Self {
        Self {
            icon: media.resolve(model.icon.as_deref()),
            text: model.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDto {
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub image: Option<String>,
    pub alt: String,
    pub heading: String,
}

impl ContactDto {
    pub fn from_model(model: department_contact_model::Model, media: &MediaUrlResolver) -> Self {
        Self {
            image: media.resolve(model.image.as_deref()),
            name: model.name,
            position: model.position,
            email: model.email,
            phone: model.phone,
            alt: model.alt,
            heading: model.heading,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaDto {
    pub heading: String,
    pub link: String,
}

impl From<cta_model::Model> for CtaDto {
    fn from(model: cta_model::Model) -> Self {
        Self {
            heading: model.heading,
            link: model.link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoPsoPeoDto {
    pub name: String,
    pub content: String,
}

impl From<po_pso_peo_model::Model> for PoPsoPeoDto {
    fn from(model: po_pso_peo_model::Model) -> Self {
        Self {
            name: model.name,
            content: model.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityDto {
    pub heading: String,
    pub description: String,
    pub image: Option<String>,
    pub alt: String,
    pub link_blank: String,
    pub content: String,
}

impl FacilityDto {
    pub fn from_model(model: facility_model::Model, media: &MediaUrlResolver) -> Self {
        Self {
            image: media.resolve(model.image.as_deref()),
            heading: model.heading,
            description: model.description,
            alt: model.alt,
            link_blank: model.link_blank,
            content: model.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityListResponse {
    pub facilities: Vec<FacilityDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerDto {
    pub image: Option<String>,
    pub alt: String,
}

impl BannerDto {
    pub fn from_model(model: banner_model::Model, media: &MediaUrlResolver) -> Self {
        Self {
            image: media.resolve(model.image.as_deref()),
            alt: model.alt,
        }
    }
}
