//! Pack Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod description;
pub(crate) mod index;
pub(crate) mod info;
pub(crate) mod price;
pub(crate) mod publish;
pub(crate) mod ready;
pub(crate) mod title;
