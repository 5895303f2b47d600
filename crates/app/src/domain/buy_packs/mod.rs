//! Buy Packs

pub mod data;
pub mod errors;
pub mod service;

pub use errors::BuyPacksServiceError;
pub use service::*;
