//! Query building: turns what the user asked for into one API call shape.
//!
//! The decision is a pure function of [`QuerySpec`] and is made before any
//! post is fetched.

use crate::api::{Board, Endpoint, ListingRequest};
use crate::config::{Limit, SortMode, TimeFilter};

/// Board name that selects the front page.
pub const FRONTPAGE_TARGET: &str = "me";

/// What to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Board(String),
    Frontpage,
    Saved,
}

impl Target {
    /// Parse a board name; `me` (any case) selects the front page.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case(FRONTPAGE_TARGET) {
            Target::Frontpage
        } else {
            Target::Board(name.trim_start_matches("r/").to_string())
        }
    }
}

/// User-facing query options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub target: Target,
    pub sort: SortMode,
    pub time: TimeFilter,
    pub search: Option<String>,
    pub limit: Limit,
}

impl QuerySpec {
    /// Query with default sort, time window and limit.
    pub fn new(target: Target) -> Self {
        Self {
            target,
            sort: SortMode::default(),
            time: TimeFilter::default(),
            search: None,
            limit: Limit::default(),
        }
    }

    /// Search text, if any non-blank text was given.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|text| !text.trim().is_empty())
    }
}

/// Builds the listing endpoint for one sort mode.
pub type ListingBuilder = fn(Board, &QuerySpec) -> Endpoint;

/// One row of the sort dispatch table.
#[derive(Clone, Copy)]
pub struct SortStrategy {
    pub sort: SortMode,
    /// Whether the listing takes a time window.
    pub timed: bool,
    pub build: ListingBuilder,
}

/// Dispatch table, one entry per [`SortMode`] in declaration order.
pub static SORT_STRATEGIES: [SortStrategy; 5] = [
    SortStrategy {
        sort: SortMode::Hot,
        timed: false,
        build: untimed_listing,
    },
    SortStrategy {
        sort: SortMode::New,
        timed: false,
        build: untimed_listing,
    },
    SortStrategy {
        sort: SortMode::Rising,
        timed: false,
        build: untimed_listing,
    },
    SortStrategy {
        sort: SortMode::Top,
        timed: true,
        build: timed_listing,
    },
    SortStrategy {
        sort: SortMode::Controversial,
        timed: true,
        build: timed_listing,
    },
];

fn untimed_listing(board: Board, spec: &QuerySpec) -> Endpoint {
    Endpoint::Listing {
        board,
        sort: spec.sort,
        time: None,
    }
}

fn timed_listing(board: Board, spec: &QuerySpec) -> Endpoint {
    Endpoint::Listing {
        board,
        sort: spec.sort,
        time: Some(spec.time),
    }
}

/// Table entry for a sort mode.
pub fn strategy_for(sort: SortMode) -> &'static SortStrategy {
    &SORT_STRATEGIES[sort as usize]
}

/// Decide the API call for a query.
///
/// Saved items ignore sort and time. Search text routes to a search call
/// that always carries sort and time. Otherwise the sort table decides.
pub fn build_request(spec: &QuerySpec) -> ListingRequest {
    let board = match &spec.target {
        Target::Saved => {
            return ListingRequest {
                endpoint: Endpoint::Saved,
                limit: spec.limit,
            }
        }
        Target::Frontpage => Board::Frontpage,
        Target::Board(name) => Board::Named(name.clone()),
    };

    let endpoint = match spec.search_text() {
        Some(query) => Endpoint::Search {
            board,
            query: query.to_string(),
            sort: spec.sort,
            time: spec.time,
        },
        None => (strategy_for(spec.sort).build)(board, spec),
    };

    ListingRequest {
        endpoint,
        limit: spec.limit,
    }
}

/// Line announcing what is about to be searched.
pub fn headline(spec: &QuerySpec, username: &str) -> String {
    let limit = spec.limit;
    let sort = spec.sort.as_str().to_uppercase();
    let time = spec.time.as_str().to_uppercase();

    let scope = match &spec.target {
        Target::Saved => return format!("SAVED POSTS OF {}", username.to_uppercase()),
        Target::Frontpage => "FROM FRONTPAGE".to_string(),
        Target::Board(name) => format!("OF R/{}", name.to_uppercase()),
    };

    match spec.search_text() {
        Some(query) => format!(
            "SEARCHING FOR {} IN FIRST {} {} POSTS {}, {}",
            query.to_uppercase(),
            limit,
            sort,
            scope,
            time
        ),
        None => format!("FIRST {} {} POSTS {}, {}", limit, sort, scope, time),
    }
}
