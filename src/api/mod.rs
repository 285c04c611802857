//! Reddit API module.
//!
//! This module provides:
//! - OAuth login for script applications
//! - HTTP client for the listing endpoints
//! - Lazily paginated post sequences
//! - API response types

pub mod auth;
pub mod client;
pub mod listing;
pub mod types;

pub use client::{QueryParams, RedditApi, MAX_PAGE_SIZE};
pub use listing::{Board, Endpoint, IterSource, ListingRequest, ListingStream, PostSource};
pub use types::*;
