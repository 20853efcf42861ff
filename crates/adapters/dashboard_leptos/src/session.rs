//! Signed-in operator, held in memory for the lifetime of the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use robodesk_domain::auth::{AccessToken, LoginSuccess, UserInfo};

use crate::api;
use crate::components::use_toasts;

/// Reactive session context.
#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<UserInfo>>,
    token: RwSignal<Option<AccessToken>>,
}

impl Session {
    fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            token: RwSignal::new(None),
        }
    }

    /// Record a successful login.
    pub fn sign_in(&self, success: LoginSuccess) {
        self.token.set(Some(success.access_token));
        self.user.set(Some(success.user_info));
    }

    pub fn sign_out(&self) {
        self.token.set(None);
        self.user.set(None);
    }

    /// The signed-in user, tracked.
    pub fn user(&self) -> Option<UserInfo> {
        self.user.get()
    }

    /// The bearer token, untracked.
    pub fn token(&self) -> Option<AccessToken> {
        self.token.get_untracked()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(Option::is_some)
    }
}

/// Install a fresh [`Session`] into context.
pub fn provide_session() {
    provide_context(Session::new());
}

/// Access the session from Leptos context.
///
/// Must be called below the `<App/>` root, which provides it.
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in context")
}

/// Render `children` only for a signed-in operator; everyone else is sent to
/// the login page. The token is re-checked against `/api/session` on mount.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    if let Some(token) = session.token() {
        spawn_local(async move {
            if let Err(err) = api::fetch_session(&token).await {
                toasts.error(format!("Session expired: {err}"));
                session.sign_out();
            }
        });
    }
    move || {
        if session.is_signed_in() {
            children().into_any()
        } else {
            view! { <Redirect path="/login"/> }.into_any()
        }
    }
}
