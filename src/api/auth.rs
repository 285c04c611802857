//! OAuth login for script applications.

use reqwest::Client;

use crate::api::types::TokenResponse;
use crate::config::CredentialsConfig;
use crate::error::{Error, Result};

/// Reddit OAuth base URL.
pub const AUTH_BASE: &str = "https://www.reddit.com";

/// Token endpoint path.
const TOKEN_PATH: &str = "/api/v1/access_token";

/// Exchange account credentials for a bearer token (password grant).
pub async fn request_token(
    client: &Client,
    auth_base: &str,
    credentials: &CredentialsConfig,
) -> Result<String> {
    let url = format!("{}{}", auth_base, TOKEN_PATH);
    tracing::debug!("POST {}", url);

    let response = client
        .post(&url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "password"),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    tracing::debug!("Token response status: {}", status);

    if status == 401 || status == 403 {
        return Err(Error::Authentication(format!(
            "HTTP {}: check client_id and client_secret",
            status
        )));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api(format!("Token request failed: HTTP {} - {}", status, body)));
    }

    let token: TokenResponse = response.json().await?;

    if let Some(error) = token.error {
        return Err(Error::Authentication(match error.as_str() {
            "invalid_grant" => "invalid username or password".to_string(),
            other => other.to_string(),
        }));
    }

    let access_token = token
        .access_token
        .ok_or_else(|| Error::Authentication("No access token in response".into()))?;

    tracing::debug!(
        "Obtained {} token, expires in {:?}s, scope {:?}",
        token.token_type.as_deref().unwrap_or("unknown"),
        token.expires_in,
        token.scope
    );

    Ok(access_token)
}
