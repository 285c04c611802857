//! Search module.
//!
//! This module provides:
//! - Query building from user options
//! - Post enumeration and classification
//! - Search counters and summaries
//! - The per-run search context

pub mod context;
pub mod enumerator;
pub mod query;
pub mod state;

pub use context::SearchContext;
pub use enumerator::{enumerate_posts, SearchResult};
pub use query::{build_request, headline, strategy_for, QuerySpec, SortStrategy, Target};
pub use state::{RunSummary, SearchState};
