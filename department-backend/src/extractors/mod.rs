// src/extractors/mod.rs
pub mod department_id;

pub use department_id::DepartmentIdPath;
