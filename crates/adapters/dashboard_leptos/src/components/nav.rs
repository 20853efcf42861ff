use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let sign_out = move |_| {
        session.sign_out();
        navigate("/login", Default::default());
    };

    view! {
        <nav>
            <span class="brand">"robodesk"</span>
            <Show when=move || session.is_signed_in()>
                <ul>
                    <li><A href="/">"Digital employees"</A></li>
                </ul>
                <span class="who">
                    {move || session.user().map(|user| user.display_name).unwrap_or_default()}
                </span>
                <button class="sign-out" on:click=sign_out.clone()>"Sign out"</button>
            </Show>
        </nav>
    }
}
