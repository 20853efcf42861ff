//! Sign-in page with a client-side captcha.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use robodesk_domain::auth::{Captcha, Credentials, LoginResponse};

use crate::api;
use crate::session::use_session;

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let captcha = RwSignal::new(Captcha::generate());
    let message = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let reset_captcha = move || {
        captcha.set(Captcha::generate());
        code.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(None);

        if !captcha.with_untracked(|c| c.verify(&code.get_untracked())) {
            message.set(Some("The verification code is incorrect.".to_string()));
            reset_captcha();
            return;
        }
        let credentials = Credentials::new(username.get_untracked(), password.get_untracked());
        if let Err(err) = credentials.validate() {
            message.set(Some(err.to_string()));
            return;
        }

        pending.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&credentials).await {
                Ok(LoginResponse::Success { data }) => {
                    session.sign_in(data);
                    navigate("/", Default::default());
                }
                Ok(LoginResponse::Error { message: text }) => {
                    message.set(Some(text));
                    reset_captcha();
                }
                Err(err) => {
                    message.set(Some(format!("Sign-in failed: {err}")));
                    reset_captcha();
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="login">
            <form class="card" on:submit=on_submit>
                <h1>"robodesk"</h1>
                <p class="muted">"Sign in to manage your digital employees."</p>
                <label>
                    "Username"
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="captcha-row">
                    "Verification code"
                    <input
                        type="text"
                        maxlength="4"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="captcha"
                        title="Show another code"
                        on:click=move |_| captcha.set(Captcha::generate())
                    >
                        {move || captcha.with(|c| c.code().to_string())}
                    </button>
                </label>
                {move || message.get().map(|text| view! { <p class="error">{text}</p> })}
                <button type="submit" class="primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in\u{2026}" } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
