//! Files

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;
pub mod storage;

pub use errors::FilesServiceError;
pub use service::*;
