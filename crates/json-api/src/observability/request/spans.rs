//! Route labels for spans and metrics.

/// Segments that name a collection; the segment after one is an identifier.
const IDENTIFIED_BY: [(&str, &str); 5] = [
    ("models", "{nick_name}"),
    ("packs", "{nick_name}"),
    ("buy-packs", "{nick_name}"),
    ("files", "{hash}"),
    ("orders", "{order_id}"),
];

/// Fixed segments that may follow a collection without being an identifier.
const FIXED: [&str; 2] = ["client-data", "orders"];

/// Replace identifiers in `path` with placeholders so labels stay low-cardinality.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut label = String::new();
    let mut previous: Option<&str> = None;

    for segment in path.trim_start_matches('/').split('/') {
        label.push('/');

        let placeholder = previous.and_then(|previous| {
            IDENTIFIED_BY
                .iter()
                .find(|(collection, _)| *collection == previous)
                .map(|(_, placeholder)| *placeholder)
        });

        match placeholder {
            Some(placeholder) if !FIXED.contains(&segment) => label.push_str(placeholder),
            _ if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) => {
                label.push_str("{number}");
            }
            _ => label.push_str(segment),
        }

        previous = Some(segment);
    }

    label
}

#[cfg(test)]
mod tests {
    use super::route_label;

    #[test]
    fn pack_routes_hide_nick_names_and_numbers() {
        assert_eq!(
            route_label("/packs/alice/2/items/7"),
            "/packs/{nick_name}/{number}/items/{number}"
        );
        assert_eq!(route_label("/packs/alice"), "/packs/{nick_name}");
    }

    #[test]
    fn model_routes_hide_nick_names() {
        assert_eq!(
            route_label("/models/alice/profile-image"),
            "/models/{nick_name}/profile-image"
        );
        assert_eq!(route_label("/models"), "/models");
    }

    #[test]
    fn fixed_segments_are_kept() {
        assert_eq!(route_label("/buy-packs/client-data"), "/buy-packs/client-data");
        assert_eq!(
            route_label("/buy-packs/orders/5O190127TN364715T/capture"),
            "/buy-packs/orders/{order_id}/capture"
        );
    }

    #[test]
    fn file_hashes_are_hidden() {
        assert_eq!(
            route_label("/files/ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0=/download-url"),
            "/files/{hash}/download-url"
        );
        assert_eq!(route_label("/"), "/");
    }
}
