//! API response type definitions.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Kind tag for link posts.
pub const POST_KIND: &str = "t3";

/// Author value the API reports for removed accounts.
const DELETED_AUTHOR: &str = "[deleted]";

/// OAuth token endpoint response.
///
/// Failed logins still answer 200 with an `error` field set.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
    pub error: Option<String>,
}

/// Generic "thing" wrapper used by every listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

/// A page of a listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    /// Cursor for the next page, absent on the last one.
    pub after: Option<String>,
    #[serde(default)]
    pub children: Vec<Thing<Value>>,
}

/// A single item yielded by a listing.
///
/// The payload is kept loose; fields are read on demand with [`PostRecord::read`]
/// so that one broken item never fails a whole page.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub kind: String,
    pub data: Value,
}

/// A post's title as read from the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Title {
    Readable(String),
    /// Present but not usable as text.
    Unreadable,
}

/// Fields read from a well-formed post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub id: String,
    pub title: Title,
    /// `None` when the account was deleted.
    pub author: Option<String>,
    pub url: String,
    pub domain: String,
    pub subreddit: String,
}

/// A post whose required fields could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("post is missing required field '{field}'")]
pub struct MalformedPost {
    pub field: &'static str,
}

impl From<Thing<Value>> for PostRecord {
    fn from(thing: Thing<Value>) -> Self {
        Self {
            kind: thing.kind,
            data: thing.data,
        }
    }
}

impl PostRecord {
    /// Wrap a link post payload.
    pub fn new(data: Value) -> Self {
        Self {
            kind: POST_KIND.to_string(),
            data,
        }
    }

    /// Read the fields the searcher needs.
    pub fn read(&self) -> std::result::Result<PostFields, MalformedPost> {
        let id = self.required_str("id")?;

        let title = match self.data.get("title") {
            None => return Err(MalformedPost { field: "title" }),
            Some(Value::String(title)) => Title::Readable(title.clone()),
            Some(_) => Title::Unreadable,
        };

        let author = match self.data.get("author") {
            Some(Value::String(name)) if name != DELETED_AUTHOR => Some(name.clone()),
            _ => None,
        };

        Ok(PostFields {
            id,
            title,
            author,
            url: self.required_str("url")?,
            domain: self.required_str("domain")?,
            subreddit: self.required_str("subreddit")?,
        })
    }

    fn required_str(&self, field: &'static str) -> std::result::Result<String, MalformedPost> {
        self.data
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(MalformedPost { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_post() -> Value {
        json!({
            "id": "abc",
            "title": "Sunset",
            "author": "someone",
            "url": "https://i.imgur.com/x.jpg",
            "domain": "i.imgur.com",
            "subreddit": "pics"
        })
    }

    #[test]
    fn test_read_full_post() {
        let fields = PostRecord::new(full_post()).read().unwrap();
        assert_eq!(fields.id, "abc");
        assert_eq!(fields.title, Title::Readable("Sunset".to_string()));
        assert_eq!(fields.author.as_deref(), Some("someone"));
        assert_eq!(fields.subreddit, "pics");
    }

    #[test]
    fn test_deleted_author() {
        let mut data = full_post();
        data["author"] = json!("[deleted]");
        assert_eq!(PostRecord::new(data.clone()).read().unwrap().author, None);

        data["author"] = Value::Null;
        assert_eq!(PostRecord::new(data).read().unwrap().author, None);
    }

    #[test]
    fn test_unreadable_title() {
        let mut data = full_post();
        data["title"] = json!(42);
        assert_eq!(PostRecord::new(data).read().unwrap().title, Title::Unreadable);
    }

    #[test]
    fn test_missing_required_field() {
        let mut data = full_post();
        data.as_object_mut().unwrap().remove("url");
        let err = PostRecord::new(data).read().unwrap_err();
        assert_eq!(err.field, "url");
    }

    #[test]
    fn test_comment_is_malformed() {
        let comment = PostRecord {
            kind: "t1".to_string(),
            data: json!({"id": "c1", "body": "nice", "author": "x", "subreddit": "pics"}),
        };
        assert!(comment.read().is_err());
    }

    #[test]
    fn test_parse_listing_page() {
        let page: Thing<Listing> = serde_json::from_value(json!({
            "kind": "Listing",
            "data": {
                "after": "t3_abc",
                "children": [{"kind": "t3", "data": full_post()}]
            }
        }))
        .unwrap();
        assert_eq!(page.data.after.as_deref(), Some("t3_abc"));
        assert_eq!(page.data.children.len(), 1);
    }
}
