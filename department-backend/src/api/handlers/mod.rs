// src/api/handlers/mod.rs
pub mod department_handler;
