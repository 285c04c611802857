//! Reddit API HTTP client.

use reqwest::{header, Client, Response};
use url::Url;

use crate::api::auth::{request_token, AUTH_BASE};
use crate::api::types::{Listing, Thing};
use crate::config::CredentialsConfig;
use crate::error::{Error, Result};

/// Reddit OAuth API base URL.
pub const API_BASE: &str = "https://oauth.reddit.com";

/// Largest page the listing endpoints will return.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Fallback wait when a 429 carries no reset header.
const DEFAULT_RETRY_AFTER: u64 = 60;

/// Query parameters for one API call.
pub type QueryParams = Vec<(&'static str, String)>;

/// Authenticated Reddit API client.
pub struct RedditApi {
    client: Client,
    token: String,
    username: String,
    api_base: String,
}

impl RedditApi {
    /// Log in with script-app credentials against the public endpoints.
    pub async fn login(credentials: &CredentialsConfig) -> Result<Self> {
        Self::login_with(credentials, AUTH_BASE, API_BASE).await
    }

    /// Log in against explicit auth and API base URLs.
    pub async fn login_with(
        credentials: &CredentialsConfig,
        auth_base: &str,
        api_base: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&credentials.user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        let token = request_token(&client, auth_base, credentials).await?;

        Ok(Self {
            client,
            token,
            username: credentials.username.clone(),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Name of the logged-in account.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Make an authenticated GET request.
    async fn get(&self, path: &str, params: &[(&'static str, String)]) -> Result<Response> {
        let mut url = Url::parse(&format!("{}{}", self.api_base, path))?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("raw_json", "1");
        }

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        // Check for rate limiting
        if status == 429 {
            let retry_after = response
                .headers()
                .get("x-ratelimit-reset")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<f64>().ok())
                .map(|secs| secs.ceil() as u64)
                .unwrap_or(DEFAULT_RETRY_AFTER);
            return Err(Error::RateLimited(retry_after));
        }

        // Check for auth errors
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Auth error response: {}", body);
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() {
                    "Authentication failed"
                } else {
                    &body
                }
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!("HTTP {} for {}: {}", status, path, body)));
        }

        Ok(response)
    }

    /// Fetch one page of a listing.
    pub async fn get_listing(&self, path: &str, params: &[(&'static str, String)]) -> Result<Listing> {
        let response = self.get(path, params).await?;
        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map_or(true, |v| v.contains("json"));
        let text = response.text().await?;
        tracing::debug!("Listing response length: {} bytes", text.len());

        if !is_json {
            return Err(Error::Api(format!(
                "Unexpected non-JSON response for {}: {}",
                path,
                preview(&text, 200)
            )));
        }

        let thing: Thing<Listing> = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse listing: {} - Response: {}",
                e,
                preview(&text, 500)
            ))
        })?;

        if thing.kind != "Listing" {
            return Err(Error::Api(format!(
                "Expected a Listing for {}, got '{}'",
                path, thing.kind
            )));
        }

        Ok(thing.data)
    }
}

/// First `max` characters of a response body, for error messages.
fn preview(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
