//! # filedrop-core
//!
//! Core crate for Filedrop. Contains the collaborator traits (remote drive,
//! drop entries, notifications), configuration schemas, the virtual path and
//! listing types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Filedrop crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
