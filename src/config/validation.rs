//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Board name pattern; `+` joins several boards into one listing.
const BOARD_PATTERN: &str = r"^[A-Za-z0-9_]{2,21}(\+[A-Za-z0-9_]{2,21})*$";

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    let credentials = &config.credentials;
    validate_secret("client_id", &credentials.client_id)?;
    validate_secret("client_secret", &credentials.client_secret)?;
    validate_secret("username", &credentials.username)?;
    validate_secret("password", &credentials.password)?;
    validate_user_agent(&credentials.user_agent)?;

    Ok(())
}

/// Validate one credential value.
pub fn validate_secret(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingConfig(field.to_string()));
    }

    let lower = value.to_lowercase();
    if lower.contains("replaceme") || lower.starts_with("your_") {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Value appears to be a placeholder. Please provide your actual Reddit {}.",
                field
            ),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    Ok(())
}

/// Validate a board name given on the command line.
pub fn validate_board_name(name: &str) -> Result<()> {
    let pattern =
        Regex::new(BOARD_PATTERN).map_err(|e| Error::Config(format!("Bad board pattern: {}", e)))?;

    let clean = name.trim_start_matches("r/");
    if !pattern.is_match(clean) {
        return Err(Error::ConfigValidation {
            field: "subreddit".to_string(),
            message: format!(
                "Subreddit '{}' is invalid. Use letters, digits and underscores, joined by '+'.",
                name
            ),
        });
    }

    Ok(())
}
