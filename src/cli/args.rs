//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::config::{validate_board_name, Config, Limit, SortMode, TimeFilter};
use crate::error::{Error, Result};
use crate::search::{QuerySpec, Target};

/// Reddit media searcher CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-media-searcher",
    version,
    about = "Find Reddit posts that link to downloadable media",
    long_about = "Lists posts from a subreddit, your front page or your saved items and \
                  picks out the ones linking to gfycat, imgur or direct media files.\n\n\
                  Every post checked is written to a per-run log."
)]
pub struct Args {
    /// Subreddit to search, or "me" for your front page.
    #[arg(short, long)]
    pub subreddit: Option<String>,

    /// Search your saved posts instead of a listing; overrides --subreddit.
    #[arg(long)]
    pub saved: bool,

    /// Listing sort order.
    #[arg(long, value_enum, default_value_t = SortArg::Hot)]
    pub sort: SortArg,

    /// Time window for top/controversial listings and searches.
    #[arg(long, value_enum)]
    pub time: Option<TimeArg>,

    /// Maximum number of posts to check (default: no limit).
    #[arg(short, long)]
    pub limit: Option<NonZeroU32>,

    /// Search text; switches from a listing to a search.
    #[arg(long)]
    pub search: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Directory for per-run log folders.
    #[arg(long = "log-dir")]
    pub log_directory: Option<PathBuf>,

    /// Reddit app client ID.
    #[arg(long, env = "REDDIT_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Reddit app client secret.
    #[arg(long, env = "REDDIT_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Reddit account username.
    #[arg(long, env = "REDDIT_USERNAME")]
    pub username: Option<String>,

    /// Reddit account password.
    #[arg(long, env = "REDDIT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Application identifier sent as the user agent.
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Hide the per-post progress lines.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI sort argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Hot,
    New,
    Rising,
    Top,
    Controversial,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Hot => SortMode::Hot,
            SortArg::New => SortMode::New,
            SortArg::Rising => SortMode::Rising,
            SortArg::Top => SortMode::Top,
            SortArg::Controversial => SortMode::Controversial,
        }
    }
}

/// CLI time window argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeArg {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl From<TimeArg> for TimeFilter {
    fn from(arg: TimeArg) -> Self {
        match arg {
            TimeArg::Hour => TimeFilter::Hour,
            TimeArg::Day => TimeFilter::Day,
            TimeArg::Week => TimeFilter::Week,
            TimeArg::Month => TimeFilter::Month,
            TimeArg::Year => TimeFilter::Year,
            TimeArg::All => TimeFilter::All,
        }
    }
}

impl Args {
    /// Build the query from the target, sort and filter flags.
    pub fn query_spec(&self) -> Result<QuerySpec> {
        let target = if self.saved {
            Target::Saved
        } else {
            let name = self.subreddit.as_deref().ok_or_else(|| {
                Error::MissingConfig("subreddit (or --saved for saved posts)".to_string())
            })?;
            let target = Target::from_name(name);
            if let Target::Board(board) = &target {
                validate_board_name(board)?;
            }
            target
        };

        Ok(QuerySpec {
            target,
            sort: self.sort.into(),
            time: self.time.map(TimeFilter::from).unwrap_or_default(),
            search: self.search.clone(),
            limit: Limit::from_option(self.limit),
        })
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        let credentials = &mut config.credentials;

        if let Some(client_id) = &self.client_id {
            credentials.client_id = client_id.clone();
        }

        if let Some(client_secret) = &self.client_secret {
            credentials.client_secret = client_secret.clone();
        }

        if let Some(username) = &self.username {
            credentials.username = username.clone();
        }

        if let Some(password) = &self.password {
            credentials.password = password.clone();
        }

        if let Some(user_agent) = &self.user_agent {
            credentials.user_agent = user_agent.clone();
        }

        if let Some(dir) = &self.log_directory {
            config.options.log_directory = dir.clone();
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
