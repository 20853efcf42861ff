//! Auth service: login and access-token resolution.

use robodesk_domain::auth::{AccessToken, Credentials, LoginSuccess, UserInfo};
use robodesk_domain::error::{AuthError, RoboDeskError};

use crate::ports::{SessionStore, UserDirectory};

/// Application service behind `POST /api/login`.
pub struct AuthService<U, S> {
    users: U,
    sessions: S,
}

impl<U: UserDirectory, S: SessionStore> AuthService<U, S> {
    /// Create a new service backed by the given directory and session store.
    pub fn new(users: U, sessions: S) -> Self {
        Self { users, sessions }
    }

    /// Check credentials and issue an access token.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    ///
    /// # Errors
    ///
    /// Returns [`RoboDeskError::Validation`] when a field is blank,
    /// [`AuthError::InvalidCredentials`] when the check fails, or a storage
    /// error from the ports.
    #[tracing::instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: Credentials) -> Result<LoginSuccess, RoboDeskError> {
        credentials.validate()?;

        let account = self
            .users
            .find_by_username(credentials.username.trim())
            .await?
            .filter(|account| account.check_password(&credentials.password));

        let Some(account) = account else {
            tracing::info!("login rejected");
            return Err(AuthError::InvalidCredentials.into());
        };

        let access_token = AccessToken::generate();
        self.sessions
            .insert(access_token.clone(), account.info.clone())
            .await?;
        tracing::info!(user_id = %account.info.id, "login succeeded");

        Ok(LoginSuccess {
            user_info: account.info,
            access_token,
        })
    }

    /// Resolve an access token to the user it was issued to.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] for unknown tokens, or a storage
    /// error from the session store.
    pub async fn whoami(&self, token: &AccessToken) -> Result<UserInfo, RoboDeskError> {
        self.sessions
            .get(token)
            .await?
            .ok_or_else(|| AuthError::InvalidToken.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robodesk_domain::auth::{Role, UserAccount};
    use robodesk_domain::error::ValidationError;
    use robodesk_domain::id::UserId;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    struct FixedDirectory {
        account: UserAccount,
    }

    impl UserDirectory for FixedDirectory {
        fn find_by_username(
            &self,
            username: &str,
        ) -> impl Future<Output = Result<Option<UserAccount>, RoboDeskError>> + Send {
            let found = (self.account.info.username == username).then(|| self.account.clone());
            async { Ok(found) }
        }
    }

    #[derive(Default)]
    struct InMemorySessions {
        store: Mutex<HashMap<AccessToken, UserInfo>>,
    }

    impl SessionStore for InMemorySessions {
        fn insert(
            &self,
            token: AccessToken,
            user: UserInfo,
        ) -> impl Future<Output = Result<(), RoboDeskError>> + Send {
            self.store.lock().unwrap().insert(token, user);
            async { Ok(()) }
        }

        fn get(
            &self,
            token: &AccessToken,
        ) -> impl Future<Output = Result<Option<UserInfo>, RoboDeskError>> + Send {
            let result = self.store.lock().unwrap().get(token).cloned();
            async { Ok(result) }
        }
    }

    fn make_service() -> AuthService<FixedDirectory, InMemorySessions> {
        let info = UserInfo {
            id: UserId::new(),
            username: "admin".to_string(),
            display_name: "Administrator".to_string(),
            role: Role::Admin,
        };
        AuthService::new(
            FixedDirectory {
                account: UserAccount::new(info, "admin123"),
            },
            InMemorySessions::default(),
        )
    }

    #[tokio::test]
    async fn should_issue_token_when_credentials_match() {
        let svc = make_service();
        let success = svc
            .login(Credentials::new("admin", "admin123"))
            .await
            .unwrap();
        assert_eq!(success.user_info.username, "admin");

        let resolved = svc.whoami(&success.access_token).await.unwrap();
        assert_eq!(resolved, success.user_info);
    }

    #[tokio::test]
    async fn should_trim_username_before_lookup() {
        let svc = make_service();
        assert!(svc.login(Credentials::new(" admin ", "admin123")).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        let svc = make_service();
        let result = svc.login(Credentials::new("admin", "wrong")).await;
        assert!(matches!(
            result,
            Err(RoboDeskError::Auth(AuthError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn should_reject_unknown_user_like_wrong_password() {
        let svc = make_service();
        let result = svc.login(Credentials::new("ghost", "admin123")).await;
        assert!(matches!(
            result,
            Err(RoboDeskError::Auth(AuthError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn should_reject_blank_password_as_validation_error() {
        let svc = make_service();
        let result = svc.login(Credentials::new("admin", "")).await;
        assert!(matches!(
            result,
            Err(RoboDeskError::Validation(ValidationError::MissingCredentials))
        ));
    }

    #[tokio::test]
    async fn should_reject_unknown_token() {
        let svc = make_service();
        let result = svc.whoami(&AccessToken::from_string("nope")).await;
        assert!(matches!(
            result,
            Err(RoboDeskError::Auth(AuthError::InvalidToken))
        ));
    }
}
