//! Meet Domain Concerns

pub mod buy_packs;
pub mod exceptions;
pub mod files;
pub mod models;
pub mod owned_resources;
pub mod pack_payment_methods;
pub mod packs;
pub mod payments;
pub mod persons;
pub mod profiles;
