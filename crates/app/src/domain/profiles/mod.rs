//! Profiles and permissions

mod catalog;
pub mod records;

pub use catalog::*;
pub use records::*;
