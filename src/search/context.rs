//! Per-run search context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;

use crate::api::{ListingStream, RedditApi};
use crate::config::Config;
use crate::error::Result;
use crate::fs::{create_posts_log, PostsLog};
use crate::output::{create_spinner, print_query_summary};
use crate::search::enumerator::{enumerate_posts, SearchResult};
use crate::search::query::{build_request, headline, QuerySpec};

/// Everything one run needs: settings, a logged-in client and the posts log.
///
/// Built once at the start of a run with [`SearchContext::open`] and
/// released with [`SearchContext::close`].
pub struct SearchContext {
    config: Config,
    api: RedditApi,
    log: PostsLog,
}

impl SearchContext {
    /// Log in and create this run's posts log.
    pub async fn open(config: Config) -> Result<Self> {
        let spinner = create_spinner("Logging in to Reddit...");
        let api = RedditApi::login(&config.credentials).await;
        spinner.finish_and_clear();

        Self::with_api(config, api?)
    }

    /// Build a context around an already logged-in client.
    pub fn with_api(config: Config, api: RedditApi) -> Result<Self> {
        let log = create_posts_log(&config, Local::now())?;
        tracing::info!("Logged in as {}", api.username());

        Ok(Self { config, api, log })
    }

    /// Run one query to completion.
    pub async fn run(&mut self, spec: &QuerySpec) -> Result<SearchResult> {
        let request = build_request(spec);
        tracing::debug!("Listing request: {:?}", request);

        print_query_summary(
            &headline(spec, self.api.username()),
            &self.log.path().display().to_string(),
        );

        let page_delay = Duration::from_millis(self.config.options.page_delay_ms);
        let mut stream = ListingStream::new(&self.api, request, page_delay);

        let result =
            enumerate_posts(&mut stream, &mut self.log, self.config.options.show_progress).await;
        tracing::debug!("Fetched {} page(s)", stream.pages_fetched());

        result
    }

    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Flush the posts log and end the run.
    pub fn close(self) -> Result<PathBuf> {
        self.log.close()
    }

    /// Run one query, then close the log whatever the outcome.
    ///
    /// An error from the query wins over an error from closing the log.
    pub async fn run_to_close(mut self, spec: &QuerySpec) -> Result<(SearchResult, PathBuf)> {
        let outcome = self.run(spec).await;
        let closed = self.close();
        let result = outcome?;
        Ok((result, closed?))
    }
}
