//! Users, login credentials, access tokens, and the login-page captcha.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RoboDeskError, ValidationError};
use crate::id::UserId;

/// Body of `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCredentials`] when either is blank.
    pub fn validate(&self) -> Result<(), RoboDeskError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }
        Ok(())
    }
}

/// Role of a dashboard operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Operator,
}

/// Public profile returned to the dashboard after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
    pub role: Role,
}

/// A directory entry: profile plus the secret it is checked against.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub info: UserInfo,
    password: String,
}

impl UserAccount {
    #[must_use]
    pub fn new(info: UserInfo, password: impl Into<String>) -> Self {
        Self {
            info,
            password: password.into(),
        }
    }

    #[must_use]
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Opaque bearer token issued on successful login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Issue a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn from_string(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSuccess {
    pub user_info: UserInfo,
    pub access_token: AccessToken,
}

/// Wire shape of the `POST /api/login` answer.
///
/// ```json
/// {"status": "success", "data": {"user_info": {...}, "access_token": "..."}}
/// {"status": "error", "message": "invalid username or password"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LoginResponse {
    Success { data: LoginSuccess },
    Error { message: String },
}

impl From<LoginSuccess> for LoginResponse {
    fn from(data: LoginSuccess) -> Self {
        Self::Success { data }
    }
}

/// Alphabet without look-alike glyphs (`0/O`, `1/I/l`).
const CAPTCHA_ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz";
const CAPTCHA_LEN: usize = 4;
/// Bytes at or above this bound are redrawn so every glyph is equally likely.
const CAPTCHA_BYTE_BOUND: usize = 256 - 256 % CAPTCHA_ALPHABET.len();
/// Version and variant bytes of a v4 uuid carry fixed bits.
const UUID_FIXED_BYTES: [usize; 2] = [6, 8];

fn captcha_glyph(byte: u8) -> Option<char> {
    let index = usize::from(byte);
    (index < CAPTCHA_BYTE_BOUND)
        .then(|| char::from(CAPTCHA_ALPHABET[index % CAPTCHA_ALPHABET.len()]))
}

/// Verification code shown on the login page and checked locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captcha {
    code: String,
}

impl Captcha {
    /// Draw a new random code.
    #[must_use]
    pub fn generate() -> Self {
        let mut code = String::with_capacity(CAPTCHA_LEN);
        while code.len() < CAPTCHA_LEN {
            let missing = CAPTCHA_LEN - code.len();
            let bytes = uuid::Uuid::new_v4().into_bytes();
            code.extend(
                bytes
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| !UUID_FIXED_BYTES.contains(index))
                    .filter_map(|(_, byte)| captcha_glyph(*byte))
                    .take(missing),
            );
        }
        Self { code }
    }

    #[cfg(test)]
    fn from_code(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Compare user input, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn verify(&self, input: &str) -> bool {
        self.code.eq_ignore_ascii_case(input.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_info() -> UserInfo {
        UserInfo {
            id: UserId::new(),
            username: "admin".to_string(),
            display_name: "Administrator".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn should_reject_credentials_with_blank_username() {
        let creds = Credentials::new("  ", "secret");
        assert!(matches!(
            creds.validate(),
            Err(RoboDeskError::Validation(ValidationError::MissingCredentials))
        ));
    }

    #[test]
    fn should_accept_credentials_with_both_fields() {
        assert!(Credentials::new("admin", "secret").validate().is_ok());
    }

    #[test]
    fn should_check_password_exactly() {
        let account = UserAccount::new(user_info(), "secret");
        assert!(account.check_password("secret"));
        assert!(!account.check_password("Secret"));
    }

    #[test]
    fn should_generate_distinct_tokens() {
        assert_ne!(AccessToken::generate(), AccessToken::generate());
    }

    #[test]
    fn should_serialize_success_response_with_status_tag() {
        let response = LoginResponse::from(LoginSuccess {
            user_info: user_info(),
            access_token: AccessToken::from_string("tok"),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["access_token"], "tok");
        assert_eq!(json["data"]["user_info"]["username"], "admin");
    }

    #[test]
    fn should_serialize_error_response_with_message() {
        let response = LoginResponse::Error {
            message: "nope".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"status": "error", "message": "nope"}));
    }

    #[test]
    fn should_generate_captcha_from_unambiguous_alphabet() {
        for _ in 0..32 {
            let captcha = Captcha::generate();
            assert_eq!(captcha.code().len(), CAPTCHA_LEN);
            assert!(captcha
                .code()
                .bytes()
                .all(|b| CAPTCHA_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn should_map_accepted_bytes_evenly_onto_alphabet() {
        let mut hits = vec![0_usize; CAPTCHA_ALPHABET.len()];
        for byte in 0..=u8::MAX {
            if let Some(glyph) = captcha_glyph(byte) {
                let slot = CAPTCHA_ALPHABET
                    .iter()
                    .position(|b| char::from(*b) == glyph)
                    .unwrap();
                hits[slot] += 1;
            }
        }
        assert!(hits.iter().all(|count| *count == 256 / CAPTCHA_ALPHABET.len()));
    }

    #[test]
    fn should_reject_bytes_past_last_full_alphabet_cycle() {
        assert_eq!(CAPTCHA_BYTE_BOUND, 220);
        assert!(captcha_glyph(219).is_some());
        assert!(captcha_glyph(220).is_none());
        assert!(captcha_glyph(u8::MAX).is_none());
    }

    #[test]
    fn should_verify_captcha_ignoring_case_and_whitespace() {
        let captcha = Captcha::from_code("aB3k");
        assert!(captcha.verify(" AB3K "));
        assert!(!captcha.verify("aB3"));
    }
}
