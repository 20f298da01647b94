// src/api/dto/mod.rs
pub mod department_dto;
