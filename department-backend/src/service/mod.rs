// src/service/mod.rs
pub mod department_service;
