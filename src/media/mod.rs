//! Media module for link classification and post details.

pub mod classifier;
pub mod detail;

pub use classifier::{classify, is_direct_link, LinkCategory, PostType};
pub use detail::{permalink, PostDetail, DELETED_SUBMITTER, UNNAMED_TITLE};
