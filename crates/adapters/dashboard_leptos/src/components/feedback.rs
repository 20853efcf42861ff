//! Inline placeholders for pending and failed loads.

use leptos::prelude::*;

/// Spinner with a short caption.
#[component]
pub fn Loading(
    #[prop(default = "Loading\u{2026}".into(), into)] message: String,
) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}

/// A failed load, as `"{context}: {error}"`.
#[component]
pub fn ErrorNote(
    /// What was being loaded, e.g. `"Failed to load tasks"`.
    #[prop(into)]
    context: String,
    #[prop(into)] error: String,
) -> impl IntoView {
    view! { <p class="error">{context} ": " {error}</p> }
}
