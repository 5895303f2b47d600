//! Person Handlers

pub(crate) mod create;
pub(crate) mod owned_packs;
