// src/utils/mod.rs
pub mod media_url;
