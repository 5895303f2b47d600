//! Buy Pack Data

/// What the buyer sees before paying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackBuyDetails {
    pub model_nick_name: String,
    pub pack_title: Option<String>,

    /// Price in USD cents.
    pub price: u64,
}
