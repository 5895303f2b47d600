//! Models

pub mod data;
pub mod errors;
pub mod profile_images;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ModelsServiceError;
pub use profile_images::{MockProfileImagesService, PgProfileImagesService, ProfileImagesService};
pub use service::*;
