//! `x-request-id` handling.

use salvo::{http::header::HeaderValue, prelude::Response};
use tracing::warn;
use uuid::Uuid;

pub(super) const HEADER: &str = "x-request-id";

/// The caller's id when it sent a usable one, a fresh v7 uuid otherwise.
pub(super) fn resolve(sent: Option<String>) -> String {
    sent.map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty() && value.len() <= 128)
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

pub(super) fn echo(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(HEADER, value);
        }
        Err(source) => warn!(request_id, "request id is not a valid header value: {source}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_caller_id() {
        assert_eq!(resolve(Some(" abc-123 ".to_string())), "abc-123");
    }

    #[test]
    fn generates_id_for_blank_or_oversized_values() {
        let blank = resolve(Some("   ".to_string()));
        let oversized = resolve(Some("x".repeat(200)));

        assert!(Uuid::parse_str(&blank).is_ok());
        assert!(Uuid::parse_str(&oversized).is_ok());
        assert!(Uuid::parse_str(&resolve(None)).is_ok());
    }
}
