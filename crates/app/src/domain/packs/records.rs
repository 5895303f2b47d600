//! Pack Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{domain::models::records::ModelUuid, uuids::TypedUuid};

/// Pack UUID
pub type PackUuid = TypedUuid<PackRecord>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported pack item type code: {0}")]
pub struct UnsupportedTypeCode(pub String);

/// Kind of media held by a pack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemTypeCode {
    ImgJpg,
    ImgPng,
    VideoMp4,
    VideoOgg,
}

impl ItemTypeCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ImgJpg => "img-jpg",
            Self::ImgPng => "img-png",
            Self::VideoMp4 => "video-mp4",
            Self::VideoOgg => "video-ogg",
        }
    }

    /// File extension of the uploaded resource.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::ImgJpg => "jpg",
            Self::ImgPng => "png",
            Self::VideoMp4 => "mp4",
            Self::VideoOgg => "ogg",
        }
    }
}

impl FromStr for ItemTypeCode {
    type Err = UnsupportedTypeCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "img-jpg" => Ok(Self::ImgJpg),
            "img-png" => Ok(Self::ImgPng),
            "video-mp4" => Ok(Self::VideoMp4),
            "video-ogg" => Ok(Self::VideoOgg),
            other => Err(UnsupportedTypeCode(other.to_owned())),
        }
    }
}

impl fmt::Display for ItemTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A media item embedded in a pack. Stored inside the pack's `items` JSONB column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackItemRecord {
    pub type_code: ItemTypeCode,
    pub item_number: u32,
    pub resource_file_hash: String,
    pub thumbnail_file_hash: String,
    pub thumbnail_locked_file_hash: String,
    pub public_item: bool,
    pub created_at: Timestamp,
    pub active: bool,
}

/// Pack Record
#[derive(Debug, Clone, PartialEq)]
pub struct PackRecord {
    pub uuid: PackUuid,
    pub model_uuid: ModelUuid,
    pub pack_number: u32,
    pub title: Option<String>,
    pub description: Option<String>,

    /// Price in USD cents.
    pub price: Option<u64>,

    pub ready_to_publish: bool,
    pub ready_to_publish_at: Option<Timestamp>,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub items: Vec<PackItemRecord>,
    pub active: bool,
}

impl PackRecord {
    /// Items that were not deleted, in upload order.
    pub fn active_items(&self) -> impl Iterator<Item = &PackItemRecord> {
        self.items.iter().filter(|item| item.active)
    }

    /// Highest active item number plus one.
    #[must_use]
    pub fn next_item_number(&self) -> u32 {
        self.active_items()
            .map(|item| item.item_number)
            .max()
            .unwrap_or(0)
            + 1
    }

    pub fn active_item_mut(&mut self, item_number: u32) -> Option<&mut PackItemRecord> {
        self.items
            .iter_mut()
            .find(|item| item.active && item.item_number == item_number)
    }
}
