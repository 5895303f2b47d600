//! Owned Resources

pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::OwnedResourcesServiceError;
pub use service::*;
