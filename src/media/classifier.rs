//! Link classification.
//!
//! Decides from a post's URL and domain whether it points at media we know
//! how to fetch later. Absence of a match is the common case and is not an
//! error.

use serde::{Deserialize, Serialize};

/// Domain substring identifying gfycat-hosted media.
const GFYCAT_DOMAIN: &str = "gfycat";

/// Domain substring identifying imgur-hosted media.
const IMGUR_DOMAIN: &str = "imgur";

/// Upload host whose links are always direct media.
const REDDIT_UPLOADS_HOST: &str = "i.reddituploads.com";

/// Extensions treated as direct media. Matched anywhere in the URL.
const MEDIA_EXTENSIONS: [&str; 5] = [".jpg", ".png", ".mp4", ".webm", ".gif"];

/// Category assigned to a post's link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkCategory {
    /// Hosted on gfycat.
    Gfycat,
    /// Hosted on imgur.
    Imgur,
    /// Direct link to a media file.
    Direct,
    /// Not a link we recognize.
    Unclassified,
}

impl LinkCategory {
    /// Whether the link was recognized as downloadable media.
    pub fn is_classified(self) -> bool {
        self != LinkCategory::Unclassified
    }

    /// The post type recorded for this category, if any.
    pub fn post_type(self) -> Option<PostType> {
        match self {
            LinkCategory::Gfycat => Some(PostType::Gfycat),
            LinkCategory::Imgur => Some(PostType::Imgur),
            LinkCategory::Direct => Some(PostType::Direct),
            LinkCategory::Unclassified => None,
        }
    }
}

/// Post type as written to results and the posts log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Gfycat,
    Imgur,
    Direct,
}

/// Classify a link by its hosting domain, then by its URL.
///
/// Hosting domains take priority over direct-link detection, so an imgur
/// URL ending in `.jpg` is `Imgur`, not `Direct`.
pub fn classify(url: &str, domain: &str) -> LinkCategory {
    if domain.contains(GFYCAT_DOMAIN) {
        LinkCategory::Gfycat
    } else if domain.contains(IMGUR_DOMAIN) {
        LinkCategory::Imgur
    } else if is_direct_link(url) {
        LinkCategory::Direct
    } else {
        LinkCategory::Unclassified
    }
}

/// Check if a URL looks like a direct media link.
///
/// Extension matching is a plain substring test: `.jpg` inside a query
/// string or before another extension still counts.
pub fn is_direct_link(url: &str) -> bool {
    let url = url.strip_suffix('/').unwrap_or(url);

    if url.contains(REDDIT_UPLOADS_HOST) {
        return true;
    }

    MEDIA_EXTENSIONS.iter().any(|ext| url.contains(ext))
}
