/// Abstraction over where user records come from
use crate::client::UsersClient;
use crate::error::Result;
use crate::types::User;
use async_trait::async_trait;

/// Source of user records
///
/// Front ends depend on this trait instead of [`UsersClient`] directly,
/// so they can run against an in-memory list in tests.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the full list of users
    ///
    /// # Errors
    /// Returns an error if the underlying fetch fails
    async fn fetch_users(&self) -> Result<Vec<User>>;
}

#[async_trait]
impl UserSource for UsersClient {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.get_users().await
    }
}
