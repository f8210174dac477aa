// src/domain/mod.rs
pub mod bookmark;
pub mod error;
pub mod matching;
pub mod repositories;
