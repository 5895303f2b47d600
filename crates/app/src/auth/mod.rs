//! Authentication

mod errors;
mod identity;
mod service;
mod token;

pub use errors::*;
pub use identity::*;
pub use service::*;
pub use token::*;
