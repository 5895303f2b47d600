//! Packs

mod errors;
mod handlers;
pub(crate) mod items;
pub(crate) mod payment_methods;

pub(crate) use handlers::*;
