//! Buy Pack Handlers

pub(crate) mod capture;
pub(crate) mod client_data;
pub(crate) mod create_order;
pub(crate) mod details;
