//! Floating assistant avatar with a speech bubble of usage tips.

use leptos::prelude::*;

const TIPS: [&str; 4] = [
    "Pick a robot to see its tasks and inspection results.",
    "New tasks need at least one condition and one action.",
    "Paused tasks keep their rules; resume them any time.",
    "Unbinding an account stops every task of that robot.",
];

#[component]
pub fn ChatAvatar() -> impl IntoView {
    let open = RwSignal::new(false);
    let tip = RwSignal::new(0_usize);

    let toggle = move |_| {
        if !open.get_untracked() {
            tip.update(|i| *i = (*i + 1) % TIPS.len());
        }
        open.update(|open| *open = !*open);
    };

    view! {
        <div class="chat-avatar">
            <Show when=move || open.get()>
                <div class="chat-bubble">{move || TIPS[tip.get()]}</div>
            </Show>
            <button class="avatar" title="Tips" on:click=toggle>"?"</button>
        </div>
    }
}
