//! Payments

pub mod data;
pub mod paypal;
pub mod processor;
pub mod records;
pub(crate) mod repository;

pub use paypal::{PayPalClient, PayPalConfig};
pub use processor::*;
