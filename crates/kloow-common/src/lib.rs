//! # kloow-common
//!
//! Configuration and error types shared by the Kloow download service.

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
