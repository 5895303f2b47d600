//! Business rule violations.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rustc_hash::FxHashMap;

/// A rule violation the caller can act on, as opposed to an infrastructure failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessException {
    /// Machine-readable kebab-case code.
    pub code: &'static str,

    /// Human readable message.
    pub message: &'static str,

    /// Structured context for the violation.
    pub details: FxHashMap<String, String>,
}

impl BusinessException {
    #[must_use]
    pub fn new(code: &'static str, message: &'static str) -> Self {
        Self {
            code,
            message,
            details: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, key: &str, value: impl Display) -> Self {
        self.details.insert(key.to_owned(), value.to_string());
        self
    }

    #[must_use]
    pub fn person_email_not_available(email: &str) -> Self {
        Self::new("person-email-not-available", "the email is not available")
            .with_detail("email", email)
    }

    #[must_use]
    pub fn person_is_not_active(email: &str) -> Self {
        Self::new("person-is-not-active", "the person is not active").with_detail("email", email)
    }

    #[must_use]
    pub fn model_already_registered(person: impl Display, nick_name: &str) -> Self {
        Self::new(
            "model-already-registered",
            "the person is already registered as a model",
        )
        .with_detail("personUuid", person)
        .with_detail("nickName", nick_name)
    }

    #[must_use]
    pub fn model_nick_name_not_available(nick_name: &str) -> Self {
        Self::new(
            "model-nickname-not-available",
            "the model nickname is not available for register",
        )
        .with_detail("nickName", nick_name)
    }

    #[must_use]
    pub fn pack_type_code_not_supported(type_code: &str) -> Self {
        Self::new(
            "pack-type-code-not-supported",
            "the pack item type code is not supported",
        )
        .with_detail("typeCode", type_code)
    }

    #[must_use]
    pub fn pack_not_published(pack: impl Display) -> Self {
        Self::new("pack-not-published", "the pack is not published yet")
            .with_detail("packUuid", pack)
    }

    #[must_use]
    pub fn pack_without_price(pack: impl Display) -> Self {
        Self::new("pack-without-price", "the pack does not have a price")
            .with_detail("packUuid", pack)
    }

    #[must_use]
    pub fn pack_already_owned(person: impl Display, pack: impl Display) -> Self {
        Self::new("pack-already-owned", "the person already owns the pack")
            .with_detail("personUuid", person)
            .with_detail("packUuid", pack)
    }

    #[must_use]
    pub fn payment_method_incomplete(method: &str) -> Self {
        Self::new(
            "payment-method-incomplete",
            "an enabled payment method needs a recipient email and a price",
        )
        .with_detail("method", method)
    }

    #[must_use]
    pub fn payment_order_already_captured(order_id: &str) -> Self {
        Self::new(
            "payment-order-already-captured",
            "the payment order was already captured",
        )
        .with_detail("orderId", order_id)
    }
}

impl Display for BusinessException {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for BusinessException {}
