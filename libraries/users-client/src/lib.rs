//! Users Client
//!
//! HTTP client library for the JSONPlaceholder users endpoint.
//!
//! # Features
//!
//! - **Fetch**: One `GET /users` per call, decoded into [`User`] records
//! - **Errors**: Transport, status and decode failures surfaced unchanged
//! - **Seam**: [`UserSource`] for callers that want to swap the network out
//!
//! # Example
//!
//! ```ignore
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let users = users_client::get_users().await?;
//!     println!("Fetched {} users", users.len());
//!
//!     for user in &users {
//!         println!("{} {}", user.id, user.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod source;
mod types;

// Re-export main types
pub use client::{get_users, UsersClient, USERS_PATH};
pub use error::{Result, UsersClientError};
pub use source::UserSource;
pub use types::{Address, ClientConfig, Company, Geo, User, DEFAULT_BASE_URL};
