// src/config/mod.rs
//! Runtime configuration resolved from environment variables (`.env` is loaded by the binary).

pub mod app;

pub use app::AppConfig;
