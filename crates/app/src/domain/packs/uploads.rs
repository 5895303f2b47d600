//! Upload planning for new pack items.
//!
//! Every item is stored as three files: the resource itself, a thumbnail and a
//! blurred thumbnail shown while the pack is locked. Their names are derived
//! from a SHA-256 digest of the item's coordinates and a per-upload nonce, so
//! re-using the number of a deleted item never reproduces its hashes.

use base64::{Engine, engine::general_purpose::URL_SAFE};
use jiff::Timestamp;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::{models::records::ModelUuid, packs::records::ItemTypeCode};

/// Thumbnails are always stored as JPEG.
const THUMBNAIL_EXTENSION: &str = "jpg";

/// One of the three files making up an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub hash: String,
    pub path: String,
    pub is_thumbnail: bool,
    pub is_blurred: bool,
}

/// Files to create for a new item, in resource, thumbnail, locked thumbnail order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    pub resource: PlannedFile,
    pub thumbnail: PlannedFile,
    pub locked_thumbnail: PlannedFile,
}

impl UploadPlan {
    #[must_use]
    pub fn new(
        model: ModelUuid,
        pack_number: u32,
        item_number: u32,
        type_code: ItemTypeCode,
        at: Timestamp,
        nonce: Uuid,
    ) -> Self {
        let stamp = at.strftime("%Y%m%d%H%M%S").to_string();
        let seed = |extension: &str| {
            format!("{model}-{pack_number}-{item_number}-{stamp}-{}-{extension}", nonce.simple())
        };
        let path = |hash: &str, extension: &str| {
            format!("models/{model}/packs/pack-{pack_number}/item-{item_number}/{hash}.{extension}")
        };

        let resource_hash = file_hash(&seed(type_code.extension()));
        let thumbnail_hash = file_hash(&format!("{}-thumbnail", seed(THUMBNAIL_EXTENSION)));
        let locked_hash = file_hash(&format!("{}-lock", seed(THUMBNAIL_EXTENSION)));

        Self {
            resource: PlannedFile {
                path: path(&resource_hash, type_code.extension()),
                hash: resource_hash,
                is_thumbnail: false,
                is_blurred: false,
            },
            thumbnail: PlannedFile {
                path: path(&thumbnail_hash, THUMBNAIL_EXTENSION),
                hash: thumbnail_hash,
                is_thumbnail: true,
                is_blurred: false,
            },
            locked_thumbnail: PlannedFile {
                path: path(&locked_hash, THUMBNAIL_EXTENSION),
                hash: locked_hash,
                is_thumbnail: true,
                is_blurred: true,
            },
        }
    }

    #[must_use]
    pub fn files(&self) -> [&PlannedFile; 3] {
        [&self.resource, &self.thumbnail, &self.locked_thumbnail]
    }
}

/// URL-safe base64 of the SHA-256 digest of `seed`.
#[must_use]
pub fn file_hash(seed: &str) -> String {
    URL_SAFE.encode(Sha256::digest(seed.as_bytes()))
}
