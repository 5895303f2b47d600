//! Packs

pub mod access;
pub mod content;
pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;
pub mod uploads;

pub use errors::PacksServiceError;
pub use service::*;
