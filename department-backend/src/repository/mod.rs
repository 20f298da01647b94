// src/repository/mod.rs
pub mod department_repository;
