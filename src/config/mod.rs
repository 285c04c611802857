//! Configuration module for the reddit-media-searcher.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Sort, time window and limit definitions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, CredentialsConfig, OptionsConfig};
pub use modes::{Limit, SortMode, TimeFilter};
pub use validation::{validate_board_name, validate_config};
