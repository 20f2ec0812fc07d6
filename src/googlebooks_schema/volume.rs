//! Wire records for the volumes API. Unknown fields are ignored, optional
//! fields default, so schema growth upstream never breaks a fetch.

use serde::{Deserialize, Serialize};

use crate::types::book::Book;

/// Body of `GET /volumes?q=...`. The API omits `items` entirely when the
/// query matches nothing.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volumes {
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// Body of `GET /volumes/{id}`, and one element of [`Volumes::items`].
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub id:          String,
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title:                 String,
    pub subtitle:              Option<String>,
    pub description:           Option<String>,
    #[serde(default)]
    pub authors:               Vec<String>,
    pub publisher:             Option<String>,
    pub published_date:        Option<String>,
    pub image_links:           Option<ImageLinks>,
    pub canonical_volume_link: Option<String>,
    // pub page_count:         Option<u32>,
    // pub categories:         Option<Vec<String>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
    // pub small_thumbnail: Option<String>,
}

impl From<Volume> for Book {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info.unwrap_or_default();
        Book {
            id:             volume.id,
            title:          info.title,
            subtitle:       info.subtitle,
            description:    info.description,
            authors:        info.authors,
            publisher:      info.publisher,
            published_date: info.published_date,
            thumbnail_url:  info
                .image_links
                .and_then(|links| links.thumbnail)
                .map(|url| force_https(&url)),
            canonical_link: info.canonical_volume_link,
        }
    }
}

/// Thumbnail links come back as plain `http://`; rewrite the scheme so they
/// load over TLS.
fn force_https(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}
