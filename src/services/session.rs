//! The auth session persisted in browser storage under the `token` and `user`
//! keys.

use serde::{Deserialize, Serialize};

use super::access::{EXPIRED_LOGIN_PATH, LOGIN_PATH};
use super::token;
use crate::common::SessionError;
use crate::models::{Role, SessionUser};
use crate::types::AuthResponse;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Key-value storage holding the session, `localStorage` in the browser.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str);
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: SessionUser,
}

impl AuthSession {
    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn is_expired(&self, now: i64) -> bool {
        token::is_expired(&self.token, now)
    }
}

impl From<AuthResponse> for AuthSession {
    fn from(AuthResponse { token, user }: AuthResponse) -> Self {
        Self { token, user }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCheck {
    Anonymous,
    Active(AuthSession),
    /// The stored token had expired and has been cleared.
    Expired,
}

impl SessionCheck {
    pub fn session(&self) -> Option<&AuthSession> {
        match self {
            Self::Active(session) => Some(session),
            _ => None,
        }
    }

    pub fn into_session(self) -> Option<AuthSession> {
        match self {
            Self::Active(session) => Some(session),
            _ => None,
        }
    }

    /// Where the browser must go after this check, if anywhere.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::Expired => Some(EXPIRED_LOGIN_PATH),
            _ => None,
        }
    }
}

/// How the next API request should authenticate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestAuth {
    Bearer(String),
    Anonymous,
    /// The session is gone; the UI must drop it and go to the given path.
    Ended(&'static str),
}

pub struct SessionManager<S> {
    storage: S,
}

impl<S: SessionStorage> SessionManager<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn read(&self) -> Result<Option<AuthSession>, SessionError> {
        let Some(token) = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let raw_user = self
            .storage
            .get(USER_KEY)
            .ok_or_else(|| SessionError::MalformedUser("missing".into()))?;
        let user = serde_json::from_str::<SessionUser>(&raw_user)
            .map_err(|e| SessionError::MalformedUser(e.to_string()))?;

        Ok(Some(AuthSession { token, user }))
    }

    pub fn write(&self, session: &AuthSession) -> Result<(), SessionError> {
        let user = serde_json::to_string(&session.user)
            .map_err(|e| SessionError::MalformedUser(e.to_string()))?;

        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_KEY, &user)
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    /// Reads the stored session and drops it when it can no longer be used.
    pub fn check(&self, now: i64) -> SessionCheck {
        match self.read() {
            Ok(None) => SessionCheck::Anonymous,
            Ok(Some(session)) if session.is_expired(now) => {
                log::info!("Session for {} expired", session.user.email);
                self.clear();
                SessionCheck::Expired
            }
            Ok(Some(session)) => SessionCheck::Active(session),
            Err(e) => {
                log::warn!("Clearing unreadable session: {e}");
                self.clear();
                SessionCheck::Anonymous
            }
        }
    }

    /// Re-reads storage before a request. `signed_in` is whether the UI still
    /// holds a session; losing the stored keys underneath it (a logout in
    /// another tab) ends that session instead of sending an anonymous call.
    pub fn request_auth(&self, now: i64, signed_in: bool) -> RequestAuth {
        match self.check(now) {
            SessionCheck::Active(session) => RequestAuth::Bearer(session.token),
            SessionCheck::Expired => RequestAuth::Ended(EXPIRED_LOGIN_PATH),
            SessionCheck::Anonymous if signed_in => {
                log::info!("Stored session disappeared, signing out");
                RequestAuth::Ended(LOGIN_PATH)
            }
            SessionCheck::Anonymous => RequestAuth::Anonymous,
        }
    }
}
