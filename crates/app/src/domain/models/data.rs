//! Model Data

use crate::domain::models::records::ModelRecord;

/// Directory search over models whose person is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelSearch {
    /// Case-insensitive fragment of the nickname.
    pub nick_name: Option<String>,
    pub offset: u32,
    pub limit: u32,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSearchPage {
    /// Matches across every page.
    pub total_count: u64,
    pub models: Vec<ModelRecord>,
}
