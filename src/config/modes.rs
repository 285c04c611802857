//! Query mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Listing sort modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Hot,
    New,
    Rising,
    Top,
    Controversial,
}

impl SortMode {
    /// Every sort mode, in display order.
    pub const ALL: [SortMode; 5] = [
        SortMode::Hot,
        SortMode::New,
        SortMode::Rising,
        SortMode::Top,
        SortMode::Controversial,
    ];

    /// Name used in API paths and parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Hot => "hot",
            SortMode::New => "new",
            SortMode::Rising => "rising",
            SortMode::Top => "top",
            SortMode::Controversial => "controversial",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hot" => Ok(SortMode::Hot),
            "new" => Ok(SortMode::New),
            "rising" => Ok(SortMode::Rising),
            "top" => Ok(SortMode::Top),
            "controversial" => Ok(SortMode::Controversial),
            _ => Err(format!("Unknown sort mode: {}", s)),
        }
    }
}

/// Time window for time-aware listings and searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    Hour,
    Day,
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl TimeFilter {
    /// Value of the `t` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFilter::Hour => "hour",
            TimeFilter::Day => "day",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::Year => "year",
            TimeFilter::All => "all",
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(TimeFilter::Hour),
            "day" => Ok(TimeFilter::Day),
            "week" => Ok(TimeFilter::Week),
            "month" => Ok(TimeFilter::Month),
            "year" => Ok(TimeFilter::Year),
            "all" => Ok(TimeFilter::All),
            _ => Err(format!("Unknown time filter: {}", s)),
        }
    }
}

/// Maximum number of posts to pull from a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    Count(NonZeroU32),
    #[default]
    Unlimited,
}

impl Limit {
    /// Build a limit from an optional count; `None` means unlimited.
    pub fn from_option(count: Option<NonZeroU32>) -> Self {
        count.map_or(Limit::Unlimited, Limit::Count)
    }

    /// Whether `yielded` posts exhaust this limit.
    pub fn is_reached(self, yielded: u64) -> bool {
        match self {
            Limit::Count(n) => yielded >= u64::from(n.get()),
            Limit::Unlimited => false,
        }
    }

    /// Posts still allowed after `yielded`, or `None` if unlimited.
    pub fn remaining(self, yielded: u64) -> Option<u64> {
        match self {
            Limit::Count(n) => Some(u64::from(n.get()).saturating_sub(yielded)),
            Limit::Unlimited => None,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Count(n) => write!(f, "{}", n),
            Limit::Unlimited => write!(f, "UNLIMITED"),
        }
    }
}
