use leptos::prelude::*;
use leptos_router::components::A;

/// Shown when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Nothing here"</h1>
            <p>"This address does not belong to any page of the dashboard."</p>
            <p><A href="/">"Back to the robot list"</A></p>
        </div>
    }
}
