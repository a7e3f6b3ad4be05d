//! Session context shared by every page through Leptos context.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::browser::{self, BrowserStorage};
use crate::api::{ApiClient, BrowserTransport};
use crate::common::{ApiConfig, ApiError};
use crate::models::SessionUser;
use crate::services::access::{EXPIRED_LOGIN_PATH, LOGIN_PATH};
use crate::services::{AuthSession, RequestAuth, SessionManager};

/// Loaded state of a remote collection: `None` while loading.
pub type Remote<T> = RwSignal<Option<Result<T, String>>>;

fn manager() -> SessionManager<BrowserStorage> {
    SessionManager::new(BrowserStorage)
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<AuthSession>>,
    ready: RwSignal<bool>,
    config: StoredValue<ApiConfig>,
}

impl SessionContext {
    /// Creates the context and restores any stored session once running in
    /// the browser. Server rendering always sees a session that is not ready.
    pub fn provide(config: ApiConfig) -> Self {
        let ctx = Self {
            session: RwSignal::new(None),
            ready: RwSignal::new(false),
            config: StoredValue::new(config),
        };

        provide_context(ctx);
        Effect::new(move |_| ctx.restore());

        ctx
    }

    fn restore(&self) {
        let check = manager().check(browser::now());
        let redirect = check.redirect();

        self.session.set(check.into_session());
        self.ready.set(true);

        if let Some(path) = redirect {
            browser::redirect(path);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn session(&self) -> Option<AuthSession> {
        self.session.get()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn sign_in(&self, session: AuthSession) {
        if let Err(e) = manager().write(&session) {
            log::error!("Could not persist session: {e}");
        }
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        self.end(LOGIN_PATH);
    }

    /// Ends the session because the backend or the token itself says so.
    pub fn expire(&self) {
        self.end(EXPIRED_LOGIN_PATH);
    }

    fn end(&self, path: &str) {
        manager().clear();
        self.session.set(None);
        browser::redirect(path);
    }

    /// Client for the endpoints that need no token, such as login.
    pub fn public_client(&self) -> ApiClient {
        ApiClient::new(BrowserTransport, self.config.get_value())
    }

    /// API client carrying the current token. Re-reads storage first and
    /// returns `None` after ending a session that is no longer usable.
    pub fn client(&self) -> Option<ApiClient> {
        let client = self.public_client();
        let signed_in = self.session.with_untracked(Option::is_some);

        match manager().request_auth(browser::now(), signed_in) {
            RequestAuth::Bearer(token) => Some(client.with_token(token)),
            RequestAuth::Anonymous => Some(client),
            RequestAuth::Ended(path) => {
                self.end(path);
                None
            }
        }
    }

    /// Maps a call result for display, expiring the session on a 401.
    pub fn settle<T>(&self, result: Result<T, ApiError>) -> Result<T, String> {
        result.map_err(|e| {
            if e.is_session_fatal() {
                self.expire();
            }
            e.to_string()
        })
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Runs `fetch` with a fresh client and stores the settled result in `target`.
pub fn spawn_fetch<T, F, Fut>(session: SessionContext, target: Remote<T>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn_local(async move {
        let Some(client) = session.client() else {
            return;
        };

        let result = fetch(client).await;
        target.set(Some(session.settle(result)));
    });
}

/// Loads `target` once the component is mounted in the browser.
pub fn fetch_on_mount<T, F, Fut>(target: Remote<T>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Fn(ApiClient) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let session = use_session();
    Effect::new(move |_| spawn_fetch(session, target, fetch.clone()));
}

/// Applies `f` to the loaded value, if any.
pub fn update_loaded<T>(target: Remote<T>, f: impl FnOnce(&mut T))
where
    T: Send + Sync + 'static,
{
    target.update(|state| {
        if let Some(Ok(value)) = state {
            f(value);
        }
    });
}

/// Runs a mutation with `pending` raised and hands the settled result to `done`.
pub fn spawn_action<T, F, Fut, D>(
    session: SessionContext,
    pending: RwSignal<bool>,
    action: F,
    done: D,
)
where
    T: 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    D: FnOnce(Result<T, String>) + 'static,
{
    pending.set(true);
    spawn_local(async move {
        let Some(client) = session.client() else {
            pending.set(false);
            return;
        };

        let result = session.settle(action(client).await);
        pending.set(false);
        done(result);
    });
}
