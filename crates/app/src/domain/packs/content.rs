//! Redacted views of pack content.

use crate::domain::packs::{
    access::AccessLevel,
    records::{ItemTypeCode, PackItemRecord, PackRecord},
};

/// An item as shown to a requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackItemView {
    pub type_code: ItemTypeCode,
    pub item_number: u32,

    /// Absent unless the item is unlocked.
    pub resource_file_hash: Option<String>,

    /// The standard thumbnail when unlocked, the blurred one otherwise.
    pub thumbnail_file_hash: String,

    pub is_locked: bool,
}

/// A pack as listed on its model's page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    pub pack_number: u32,
    pub title: Option<String>,
    pub cover_image_file_hash: Option<String>,
    pub is_locked: bool,
}

#[must_use]
pub fn assemble_item(item: &PackItemRecord, level: AccessLevel) -> PackItemView {
    if item.public_item || level.can_view_content() {
        PackItemView {
            type_code: item.type_code,
            item_number: item.item_number,
            resource_file_hash: Some(item.resource_file_hash.clone()),
            thumbnail_file_hash: item.thumbnail_file_hash.clone(),
            is_locked: false,
        }
    } else {
        PackItemView {
            type_code: item.type_code,
            item_number: item.item_number,
            resource_file_hash: None,
            thumbnail_file_hash: item.thumbnail_locked_file_hash.clone(),
            is_locked: true,
        }
    }
}

/// Active items of the pack, redacted for `level`. Nothing is listed when access is denied.
#[must_use]
pub fn assemble_items(pack: &PackRecord, level: AccessLevel) -> Vec<PackItemView> {
    if level == AccessLevel::Denied {
        return Vec::new();
    }

    pack.active_items()
        .map(|item| assemble_item(item, level))
        .collect()
}

/// `None` when the pack must not be listed at all.
#[must_use]
pub fn assemble_pack_summary(pack: &PackRecord, level: AccessLevel) -> Option<PackSummary> {
    if level == AccessLevel::Denied {
        return None;
    }

    let is_locked = level == AccessLevel::Locked;

    Some(PackSummary {
        pack_number: pack.pack_number,
        title: pack.title.clone(),
        cover_image_file_hash: cover_image(pack, is_locked),
        is_locked,
    })
}

fn cover_image(pack: &PackRecord, is_locked: bool) -> Option<String> {
    let first = pack.active_items().next()?;

    if is_locked {
        return Some(first.thumbnail_locked_file_hash.clone());
    }

    // without a public item the cover falls back to the blurred thumbnail
    let cover = pack
        .active_items()
        .find(|item| item.public_item)
        .map_or(&first.thumbnail_locked_file_hash, |item| {
            &item.thumbnail_file_hash
        });

    Some(cover.clone())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::{models::records::ModelUuid, packs::records::PackUuid};

    use super::*;

    fn item(item_number: u32, public_item: bool, active: bool) -> PackItemRecord {
        PackItemRecord {
            type_code: ItemTypeCode::ImgJpg,
            item_number,
            resource_file_hash: format!("H{item_number}"),
            thumbnail_file_hash: format!("T{item_number}"),
            thumbnail_locked_file_hash: format!("L{item_number}"),
            public_item,
            created_at: Timestamp::UNIX_EPOCH,
            active,
        }
    }

    fn pack(items: Vec<PackItemRecord>) -> PackRecord {
        PackRecord {
            uuid: PackUuid::new(),
            model_uuid: ModelUuid::new(),
            pack_number: 7,
            title: Some("Beach".to_string()),
            description: None,
            price: None,
            ready_to_publish: true,
            ready_to_publish_at: None,
            published: true,
            published_at: None,
            created_at: Timestamp::UNIX_EPOCH,
            items,
            active: true,
        }
    }

    #[test]
    fn private_item_below_view_is_redacted() {
        let private = item(2, false, true);

        for level in [AccessLevel::Denied, AccessLevel::Locked] {
            let view = assemble_item(&private, level);

            assert_eq!(view.resource_file_hash, None);
            assert_eq!(view.thumbnail_file_hash, "L2");
            assert!(view.is_locked);
        }
    }

    #[test]
    fn private_item_from_view_up_is_revealed() {
        let private = item(2, false, true);

        for level in [AccessLevel::View, AccessLevel::Model, AccessLevel::Edit] {
            let view = assemble_item(&private, level);

            assert_eq!(view.resource_file_hash.as_deref(), Some("H2"));
            assert_eq!(view.thumbnail_file_hash, "T2");
            assert!(!view.is_locked);
        }
    }

    #[test]
    fn public_item_is_always_revealed() {
        let view = assemble_item(&item(1, true, true), AccessLevel::Locked);

        assert_eq!(view.resource_file_hash.as_deref(), Some("H1"));
        assert!(!view.is_locked);
    }

    #[test]
    fn items_skip_inactive_and_denied_lists_nothing() {
        let pack = pack(vec![item(1, true, true), item(2, false, false), item(3, false, true)]);

        let numbers: Vec<u32> = assemble_items(&pack, AccessLevel::Locked)
            .iter()
            .map(|view| view.item_number)
            .collect();

        assert_eq!(numbers, vec![1, 3]);
        assert!(assemble_items(&pack, AccessLevel::Denied).is_empty());
    }

    #[test]
    fn denied_pack_is_omitted_from_listing() {
        assert_eq!(
            assemble_pack_summary(&pack(vec![item(1, true, true)]), AccessLevel::Denied),
            None
        );
    }

    #[test]
    fn locked_pack_cover_is_first_locked_thumbnail() {
        let summary = assemble_pack_summary(
            &pack(vec![item(1, false, true), item(2, true, true)]),
            AccessLevel::Locked,
        );

        assert_eq!(
            summary,
            Some(PackSummary {
                pack_number: 7,
                title: Some("Beach".to_string()),
                cover_image_file_hash: Some("L1".to_string()),
                is_locked: true,
            })
        );
    }

    #[test]
    fn unlocked_pack_cover_prefers_first_public_item() {
        let summary = assemble_pack_summary(
            &pack(vec![item(1, false, true), item(2, true, true), item(3, true, true)]),
            AccessLevel::View,
        );

        let cover = summary.and_then(|summary| summary.cover_image_file_hash);

        assert_eq!(cover.as_deref(), Some("T2"));
    }

    #[test]
    fn unlocked_pack_without_public_items_falls_back_to_locked_thumbnail() {
        let summary = assemble_pack_summary(
            &pack(vec![item(1, false, true), item(2, false, true)]),
            AccessLevel::Model,
        );

        let cover = summary.and_then(|summary| summary.cover_image_file_hash);

        assert_eq!(cover.as_deref(), Some("L1"));
    }

    #[test]
    fn cover_ignores_deleted_items_and_empty_pack_has_none() {
        let deleted_first = assemble_pack_summary(
            &pack(vec![item(1, true, false), item(2, false, true)]),
            AccessLevel::Locked,
        );

        assert_eq!(
            deleted_first.and_then(|summary| summary.cover_image_file_hash),
            Some("L2".to_string())
        );

        let empty = assemble_pack_summary(&pack(vec![]), AccessLevel::View);

        assert_eq!(empty.and_then(|summary| summary.cover_image_file_hash), None);
    }
}
