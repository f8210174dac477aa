// src/lib.rs
#![crate_type = "lib"]
#![crate_name = "tp_cli"]

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
