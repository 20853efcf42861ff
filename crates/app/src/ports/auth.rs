//! Authentication ports: the user directory and the token session store.

use std::future::Future;

use robodesk_domain::auth::{AccessToken, UserAccount, UserInfo};
use robodesk_domain::error::RoboDeskError;

/// Looks up operator accounts.
pub trait UserDirectory {
    /// Find an account by exact username.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<UserAccount>, RoboDeskError>> + Send;
}

/// Remembers which user an issued token belongs to.
pub trait SessionStore {
    /// Record a freshly issued token.
    fn insert(
        &self,
        token: AccessToken,
        user: UserInfo,
    ) -> impl Future<Output = Result<(), RoboDeskError>> + Send;

    /// Resolve a token to its user.
    fn get(
        &self,
        token: &AccessToken,
    ) -> impl Future<Output = Result<Option<UserInfo>, RoboDeskError>> + Send;
}
