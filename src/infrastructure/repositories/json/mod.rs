// src/infrastructure/repositories/json/mod.rs
pub mod model;
pub mod repository;
