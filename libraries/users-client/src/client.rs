//! Users endpoint client.

use crate::error::{Result, UsersClientError};
use crate::types::{ClientConfig, User};
use reqwest::Client;
use tracing::debug;

/// Path of the users collection, relative to the base URL.
pub const USERS_PATH: &str = "/users";

/// Fetch every user from the public JSONPlaceholder service.
///
/// A fresh client is built for the call, so nothing is kept between calls.
/// Any failure of the request is returned as-is; there is no retry.
///
/// # Example
///
/// ```ignore
/// let users = users_client::get_users().await?;
/// assert!(!users.is_empty());
/// ```
pub async fn get_users() -> Result<Vec<User>> {
    UsersClient::new(ClientConfig::default())?.get_users().await
}

/// Client for the users endpoint of a JSONPlaceholder-compatible server.
///
/// The client holds no mutable state, so it can be shared between tasks
/// and called concurrently.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: Client,
    base_url: String,
}

impl UsersClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(UsersClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(UsersClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the users collection.
    pub fn users_url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    /// Fetch every user, in the order the server returned them.
    ///
    /// Connection failures, non-success status codes and bodies that are not
    /// a JSON array of users all come back as [`UsersClientError::Request`].
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let url = self.users_url();
        debug!(url = %url, "Fetching users");

        let users: Vec<User> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(count = users.len(), "Fetched users");

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(UsersClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(UsersClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(UsersClient::new(ClientConfig::new("")).is_err());
        assert!(UsersClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(UsersClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            UsersClient::new(ClientConfig::new("https://example.com//")).expect("valid url");

        assert_eq!(client.base_url(), "https://example.com");
        assert_eq!(client.users_url(), "https://example.com/users");
    }

    #[test]
    fn test_default_users_url() {
        let client = UsersClient::new(ClientConfig::default()).expect("valid url");
        assert_eq!(
            client.users_url(),
            "https://jsonplaceholder.typicode.com/users"
        );
    }
}
