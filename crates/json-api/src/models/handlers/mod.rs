//! Model Handlers

pub(crate) mod about_me;
pub(crate) mod profile;
pub(crate) mod profile_image;
pub(crate) mod register;
pub(crate) mod search;
