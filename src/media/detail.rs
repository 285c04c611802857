//! Normalized post details.

use serde::{Deserialize, Serialize};

use crate::media::classifier::PostType;

/// Placeholder used when a post's author account no longer exists.
pub const DELETED_SUBMITTER: &str = "[deleted]";

/// Placeholder used when a post's title could not be read.
pub const UNNAMED_TITLE: &str = "unnamed";

/// Normalized metadata for one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(rename = "postId")]
    pub post_id: String,

    #[serde(rename = "postTitle")]
    pub post_title: String,

    #[serde(rename = "postSubmitter")]
    pub post_submitter: String,

    /// `None` when the link was not recognized as media.
    #[serde(rename = "postType")]
    pub post_type: Option<PostType>,

    #[serde(rename = "postURL")]
    pub post_url: String,

    #[serde(rename = "postSubreddit")]
    pub post_subreddit: String,
}

impl PostDetail {
    /// Permalink to the post's comment page.
    pub fn permalink(&self) -> String {
        permalink(&self.post_subreddit, &self.post_id)
    }
}

/// Build the comment-page permalink for a post.
pub fn permalink(subreddit: &str, post_id: &str) -> String {
    format!("https://www.reddit.com/r/{}/comments/{}", subreddit, post_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_detail(post_type: Option<PostType>) -> PostDetail {
        PostDetail {
            post_id: "abc123".to_string(),
            post_title: "A title".to_string(),
            post_submitter: "someone".to_string(),
            post_type,
            post_url: "https://i.imgur.com/x.jpg".to_string(),
            post_subreddit: "pics".to_string(),
        }
    }

    #[test]
    fn test_permalink() {
        assert_eq!(
            make_detail(None).permalink(),
            "https://www.reddit.com/r/pics/comments/abc123"
        );
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(make_detail(Some(PostType::Imgur))).unwrap();
        assert_eq!(json["postId"], "abc123");
        assert_eq!(json["postTitle"], "A title");
        assert_eq!(json["postSubmitter"], "someone");
        assert_eq!(json["postType"], "imgur");
        assert_eq!(json["postURL"], "https://i.imgur.com/x.jpg");
        assert_eq!(json["postSubreddit"], "pics");
    }

    #[test]
    fn test_unclassified_type_is_null() {
        let json = serde_json::to_value(make_detail(None)).unwrap();
        assert!(json["postType"].is_null());
    }
}
