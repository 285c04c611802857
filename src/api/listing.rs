//! Listing requests and the lazily paginated post sequence.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::time::sleep;

use crate::api::client::{QueryParams, RedditApi, MAX_PAGE_SIZE};
use crate::api::types::PostRecord;
use crate::config::{Limit, SortMode, TimeFilter};
use crate::error::Result;

/// Where a listing or search is scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Board {
    /// The logged-in account's aggregated front page.
    Frontpage,
    /// A named subreddit (or several joined with `+`).
    Named(String),
}

/// Which endpoint to call and with what shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Sorted listing; `time` is only set for sorts that accept it.
    Listing {
        board: Board,
        sort: SortMode,
        time: Option<TimeFilter>,
    },
    /// The logged-in account's saved items.
    Saved,
    /// Text search; always carries sort and time window.
    Search {
        board: Board,
        query: String,
        sort: SortMode,
        time: TimeFilter,
    },
}

/// A fully decided API call, made before any post is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub endpoint: Endpoint,
    pub limit: Limit,
}

impl ListingRequest {
    /// API path for this request.
    pub fn path(&self, username: &str) -> String {
        match &self.endpoint {
            Endpoint::Listing { board, sort, .. } => match board {
                Board::Frontpage => format!("/{}", sort),
                Board::Named(name) => format!("/r/{}/{}", name, sort),
            },
            Endpoint::Saved => format!("/user/{}/saved", username),
            Endpoint::Search { board, .. } => match board {
                Board::Frontpage => "/search".to_string(),
                Board::Named(name) => format!("/r/{}/search", name),
            },
        }
    }

    /// Query parameters other than paging (`limit`, `after`).
    pub fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        match &self.endpoint {
            Endpoint::Listing { time, .. } => {
                if let Some(time) = time {
                    params.push(("t", time.to_string()));
                }
            }
            Endpoint::Saved => {}
            Endpoint::Search {
                board,
                query,
                sort,
                time,
            } => {
                params.push(("q", query.clone()));
                params.push(("sort", sort.to_string()));
                params.push(("t", time.to_string()));
                if matches!(board, Board::Named(_)) {
                    params.push(("restrict_sr", "on".to_string()));
                }
            }
        }
        params
    }
}

/// A forward-only sequence of posts, pulled one at a time.
#[async_trait]
pub trait PostSource: Send {
    /// Next post, or `None` once the sequence is exhausted.
    async fn next_post(&mut self) -> Result<Option<PostRecord>>;
}

/// Server-paginated listing that fetches pages as posts are pulled.
pub struct ListingStream<'a> {
    api: &'a RedditApi,
    request: ListingRequest,
    page_delay: Duration,
    buffer: VecDeque<PostRecord>,
    after: Option<String>,
    yielded: u64,
    pages_fetched: u64,
    exhausted: bool,
}

impl<'a> ListingStream<'a> {
    pub fn new(api: &'a RedditApi, request: ListingRequest, page_delay: Duration) -> Self {
        Self {
            api,
            request,
            page_delay,
            buffer: VecDeque::new(),
            after: None,
            yielded: 0,
            pages_fetched: 0,
            exhausted: false,
        }
    }

    /// Number of pages requested so far.
    pub fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    async fn fetch_page(&mut self) -> Result<()> {
        // Rate limiting delay between pages
        if self.pages_fetched > 0 && !self.page_delay.is_zero() {
            let base = self.page_delay.as_millis() as u64;
            let jitter = rand::thread_rng().gen_range(0..=base / 2);
            sleep(Duration::from_millis(base + jitter)).await;
        }

        let page_size = self
            .request
            .limit
            .remaining(self.yielded)
            .map_or(MAX_PAGE_SIZE, |remaining| remaining.min(MAX_PAGE_SIZE));

        let mut params = self.request.params();
        params.push(("limit", page_size.to_string()));
        if let Some(after) = &self.after {
            params.push(("after", after.clone()));
        }

        let path = self.request.path(self.api.username());
        let listing = self.api.get_listing(&path, &params).await?;
        self.pages_fetched += 1;

        tracing::debug!(
            "Page {} of {}: {} items, next cursor {:?}",
            self.pages_fetched,
            path,
            listing.children.len(),
            listing.after
        );

        if listing.children.is_empty() || listing.after.is_none() {
            self.exhausted = true;
        }
        self.after = listing.after;
        self.buffer
            .extend(listing.children.into_iter().map(PostRecord::from));

        Ok(())
    }
}

#[async_trait]
impl PostSource for ListingStream<'_> {
    async fn next_post(&mut self) -> Result<Option<PostRecord>> {
        if self.request.limit.is_reached(self.yielded) {
            return Ok(None);
        }

        if self.buffer.is_empty() && !self.exhausted {
            self.fetch_page().await?;
        }

        match self.buffer.pop_front() {
            Some(post) => {
                self.yielded += 1;
                Ok(Some(post))
            }
            None => Ok(None),
        }
    }
}

/// Adapts an in-memory iterator to a [`PostSource`].
pub struct IterSource<I> {
    iter: I,
}

impl<I> IterSource<I>
where
    I: Iterator<Item = Result<PostRecord>> + Send,
{
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

#[async_trait]
impl<I> PostSource for IterSource<I>
where
    I: Iterator<Item = Result<PostRecord>> + Send,
{
    async fn next_post(&mut self) -> Result<Option<PostRecord>> {
        self.iter.next().transpose()
    }
}
