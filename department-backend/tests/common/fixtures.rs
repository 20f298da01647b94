// tests/common/fixtures.rs
//! テスト用の学科データ一式

use department_backend::domain::{
    about_department_model, banner_model, benefit_model, cta_model, curriculum_model,
    department_contact_model, department_model, facility_model, number_data_model,
    po_pso_peo_model, program_offered_model, quick_link_model,
};
use sea_orm::{DatabaseBackend, MockDatabase};

pub fn department(id: i64, name: &str) -> department_model::Model {
    department_model::Model {
        id,
        name: name.to_string(),
        ug: true,
        pg: true,
        phd: id % 2 == 1,
        vision: format!("{} vision", name),
        mission: format!("{} mission", name),
    }
}

pub fn program(id: i64, department_id: i64, image: Option<&str>) -> program_offered_model::Model {
    program_offered_model::Model {
        id,
        department_id,
        name: format!("Program {}", id),
        description: format!("Description of program {}", id),
        image: image.map(str::to_string),
        explore_link: format!("/programs/{}", id),
        apply_link: format!("/apply/{}", id),
    }
}

pub fn facility(id: i64, department_id: i64, image: Option<&str>) -> facility_model::Model {
    facility_model::Model {
        id,
        department_id,
        heading: format!("Facility {}", id),
        description: "Well equipped".to_string(),
        image: image.map(str::to_string),
        alt: format!("Facility {} photo", id),
        link_blank: format!("https://example.edu/facilities/{}", id),
        content: "Available 24x7".to_string(),
    }
}

/// 1つの学科とその子コレクションすべて
#[derive(Clone, Debug)]
pub struct DepartmentFixture {
    pub department: department_model::Model,
    pub about_sections: Vec<about_department_model::Model>,
    pub numbers: Vec<number_data_model::Model>,
    pub quick_links: Vec<quick_link_model::Model>,
    pub programs: Vec<program_offered_model::Model>,
    pub curriculum: Vec<curriculum_model::Model>,
    pub benefits: Vec<benefit_model::Model>,
    pub contacts: Vec<department_contact_model::Model>,
    pub ctas: Vec<cta_model::Model>,
    pub po_pso_peo: Vec<po_pso_peo_model::Model>,
    pub facilities: Vec<facility_model::Model>,
    pub banners: Vec<banner_model::Model>,
}

impl DepartmentFixture {
    /// 子コレクションが空の学科
    pub fn bare(id: i64, name: &str) -> Self {
        Self {
            department: department(id, name),
            about_sections: vec![],
            numbers: vec![],
            quick_links: vec![],
            programs: vec![],
            curriculum: vec![],
            benefits: vec![],
            contacts: vec![],
            ctas: vec![],
            po_pso_peo: vec![],
            facilities: vec![],
            banners: vec![],
        }
    }

    /// すべての子コレクションに行を持つ学科。ID は department_id * 100 から採番する
    pub fn populated(id: i64, name: &str) -> Self {
        let base = id * 100;
        Self {
            department: department(id, name),
            about_sections: vec![
                about_department_model::Model {
                    id: base + 1,
                    department_id: id,
                    heading: "About the department".to_string(),
                    content: "Established in 1985".to_string(),
                    image: Some("about/building.jpg".to_string()),
                    alt: "Department building".to_string(),
                },
                about_department_model::Model {
                    id: base + 2,
                    department_id: id,
                    heading: "Research".to_string(),
                    content: "Active research groups".to_string(),
                    image: None,
                    alt: "".to_string(),
                },
            ],
            numbers: vec![
                number_data_model::Model {
                    id: base + 1,
                    about_department_id: base + 1,
                    number: 1200,
                    symbol: "+".to_string(),
                    text: "Students".to_string(),
                    featured: true,
                    unique_id: format!("students-{}", id),
                },
                number_data_model::Model {
                    id: base + 2,
                    about_department_id: base + 1,
                    number: 98,
                    symbol: "%".to_string(),
                    text: "Placement".to_string(),
                    featured: false,
                    unique_id: format!("placement-{}", id),
                },
            ],
            quick_links: vec![quick_link_model::Model {
                id: base + 1,
                department_id: id,
                name: "Timetable".to_string(),
                link: "/timetable".to_string(),
            }],
            programs: vec![
                program(base + 1, id, Some("programs/btech.png")),
                program(base + 2, id, None),
            ],
            curriculum: vec![curriculum_model::Model {
                id: base + 1,
                department_id: id,
                name: "2024 Scheme".to_string(),
                description: "Regulations and syllabus".to_string(),
                file: Some("curriculum/2024 scheme.pdf".to_string()),
            }],
            benefits: vec![benefit_model::Model {
                id: base + 1,
                department_id: id,
                icon: Some(String::new()),
                text: "Industry mentors".to_string(),
            }],
            contacts: vec![department_contact_model::Model {
                id: base + 1,
                department_id: id,
                name: "Dr. A. Rao".to_string(),
                position: "Head of Department".to_string(),
                email: "hod@example.edu".to_string(),
                phone: "+91 00000 00000".to_string(),
                image: None,
                alt: "Portrait".to_string(),
                heading: "Contact".to_string(),
            }],
            ctas: vec![cta_model::Model {
                id: base + 1,
                department_id: id,
                heading: "Apply now".to_string(),
                link: "/apply".to_string(),
            }],
            po_pso_peo: vec![
                po_pso_peo_model::Model {
                    id: base + 1,
                    department_id: id,
                    name: "PO".to_string(),
                    content: "Engineering knowledge".to_string(),
                },
                po_pso_peo_model::Model {
                    id: base + 2,
                    department_id: id,
                    name: "PEO".to_string(),
                    content: "Lifelong learning".to_string(),
                },
            ],
            facilities: vec![facility(base + 1, id, Some("facilities/lab.jpg"))],
            banners: vec![banner_model::Model {
                id: base + 1,
                department_id: id,
                image: Some("banners/main.jpg".to_string()),
                alt: "Campus".to_string(),
            }],
        }
    }

    /// 学科詳細取得で発行されるクエリ順に結果を積む
    pub fn append_detail_results(&self, db: MockDatabase) -> MockDatabase {
        let mut db = db
            .append_query_results([vec![self.department.clone()]])
            .append_query_results([self.about_sections.clone()]);

        // 学科紹介セクションが無い場合は数値データの問い合わせは発行されない
        if !self.about_sections.is_empty() {
            db = db.append_query_results([self.numbers.clone()]);
        }

        db.append_query_results([self.quick_links.clone()])
            .append_query_results([self.programs.clone()])
            .append_query_results([self.curriculum.clone()])
            .append_query_results([self.benefits.clone()])
            .append_query_results([self.contacts.clone()])
            .append_query_results([self.ctas.clone()])
            .append_query_results([self.po_pso_peo.clone()])
            .append_query_results([self.facilities.clone()])
            .append_query_results([self.banners.clone()])
    }

    pub fn mock_detail(&self) -> MockDatabase {
        self.append_detail_results(MockDatabase::new(DatabaseBackend::Postgres))
    }
}

/// 学科が存在しない場合（find_by_id が空）
pub fn mock_missing_department() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<department_model::Model>::new()])
}
