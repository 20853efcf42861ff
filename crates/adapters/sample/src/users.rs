//! In-memory [`UserDirectory`] and [`SessionStore`].

use std::collections::HashMap;
use std::sync::RwLock;

use robodesk_app::ports::{SessionStore, UserDirectory};
use robodesk_domain::auth::{AccessToken, UserAccount, UserInfo};
use robodesk_domain::error::RoboDeskError;

use crate::error::StorageError;

/// Accounts keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    accounts: HashMap<String, UserAccount>,
}

impl InMemoryUserDirectory {
    #[must_use]
    pub fn new(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|a| (a.info.username.clone(), a))
                .collect(),
        }
    }
}

impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, RoboDeskError> {
        Ok(self.accounts.get(username).cloned())
    }
}

/// Issued tokens; forgotten on restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<AccessToken, UserInfo>>,
}

impl SessionStore for InMemorySessionStore {
    async fn insert(&self, token: AccessToken, user: UserInfo) -> Result<(), RoboDeskError> {
        self.sessions
            .write()
            .map_err(|_| StorageError::Poisoned { store: "session" })?
            .insert(token, user);
        Ok(())
    }

    async fn get(&self, token: &AccessToken) -> Result<Option<UserInfo>, RoboDeskError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| StorageError::Poisoned { store: "session" })?;
        Ok(sessions.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robodesk_domain::auth::Role;
    use robodesk_domain::id::UserId;

    fn info(username: &str) -> UserInfo {
        UserInfo {
            id: UserId::new(),
            username: username.to_string(),
            display_name: username.to_uppercase(),
            role: Role::Operator,
        }
    }

    #[tokio::test]
    async fn should_find_account_by_exact_username() {
        let dir = InMemoryUserDirectory::new(vec![UserAccount::new(info("ops"), "pw")]);
        assert!(dir.find_by_username("ops").await.unwrap().is_some());
        assert!(dir.find_by_username("OPS").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_resolve_inserted_token() {
        let store = InMemorySessionStore::default();
        let token = AccessToken::generate();
        store.insert(token.clone(), info("ops")).await.unwrap();

        let user = store.get(&token).await.unwrap().unwrap();
        assert_eq!(user.username, "ops");
        assert!(store.get(&AccessToken::generate()).await.unwrap().is_none());
    }
}
