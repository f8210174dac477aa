// src/domain/repositories/mod.rs
pub mod repository;
