//! Confirmation dialog for removing a robot's bound platform account.

use leptos::prelude::*;
use leptos::task::spawn_local;
use robodesk_domain::robot::Robot;

use super::use_toasts;
use crate::api;

#[component]
pub fn UnbindModal(
    robot: Robot,
    #[prop(into)] on_close: Callback<()>,
    /// Receives the robot as the server returned it after unbinding.
    #[prop(into)]
    on_unbound: Callback<Robot>,
) -> impl IntoView {
    let toasts = use_toasts();
    let pending = RwSignal::new(false);

    let account = robot.bound_account.as_ref().map_or_else(String::new, |account| {
        format!("{} ({})", account.account_name, account.platform)
    });
    let robot_id = robot.id.to_string();

    let confirm = move |_| {
        let robot_id = robot_id.clone();
        pending.set(true);
        spawn_local(async move {
            match api::unbind_account(&robot_id).await {
                Ok(robot) => {
                    toasts.success("Account unbound");
                    on_close.run(());
                    on_unbound.run(robot);
                }
                Err(err) => {
                    toasts.error(format!("Could not unbind: {err}"));
                    pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal confirm">
                <h2>"Unbind account?"</h2>
                <p>
                    {robot.name} " will stop acting as " <strong>{account}</strong>
                    ". Tasks stay in place but cannot run until an account is bound again."
                </p>
                <footer>
                    <button on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn-danger" disabled=move || pending.get() on:click=confirm>
                        "Unbind"
                    </button>
                </footer>
            </div>
        </div>
    }
}
