//! # filedrop-local
//!
//! Adapters backed by the local file system:
//!
//! - [`LocalDrive`] implements the remote drive on top of a root directory,
//!   with the trash namespace kept in a reserved subdirectory.
//! - [`LocalDropSource`] turns local paths into dropped entries whose
//!   directory readers return children in fixed-size batches.

pub mod drive;
pub mod source;

pub use drive::LocalDrive;
pub use source::LocalDropSource;
