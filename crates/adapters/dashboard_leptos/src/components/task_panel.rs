//! Task list of a robot with pause/resume and delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use robodesk_domain::task::Task;

use super::use_toasts;
use crate::api;

fn schedule(task: &Task) -> String {
    if task.frequency.uses_time() && !task.time.is_empty() {
        format!("{} at {}", task.frequency, task.time)
    } else {
        task.frequency.to_string()
    }
}

/// Table of tasks. `on_change` fires after any successful mutation so the
/// owner can refetch.
#[component]
pub fn TaskPanel(
    tasks: Vec<Task>,
    #[prop(into)] on_change: Callback<()>,
) -> impl IntoView {
    if tasks.is_empty() {
        return view! {
            <p class="empty">"This robot has no tasks yet. Create one with \u{201C}New task\u{201D}."</p>
        }
        .into_any();
    }

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Schedule"</th>
                    <th>"Rules"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {tasks
                    .into_iter()
                    .map(|task| view! { <TaskRow task on_change/> })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn TaskRow(task: Task, on_change: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let task_id = task.id.to_string();
    let enabled = task.enabled;
    let busy = RwSignal::new(false);

    let toggle = {
        let task_id = task_id.clone();
        move |_| {
            let task_id = task_id.clone();
            busy.set(true);
            spawn_local(async move {
                match api::set_task_enabled(&task_id, !enabled).await {
                    Ok(_) => on_change.run(()),
                    Err(err) => toasts.error(format!("Could not update task: {err}")),
                }
                busy.set(false);
            });
        }
    };

    let name = task.name.clone();
    let remove = move |_| {
        let task_id = task_id.clone();
        let name = name.clone();
        busy.set(true);
        spawn_local(async move {
            match api::delete_task(&task_id).await {
                Ok(()) => {
                    toasts.success(format!("Deleted \u{201C}{name}\u{201D}"));
                    on_change.run(());
                }
                Err(err) => toasts.error(format!("Could not delete task: {err}")),
            }
            busy.set(false);
        });
    };

    let rules = format!(
        "{} condition(s) \u{2192} {} action(s)",
        task.conditions.len(),
        task.actions.len()
    );

    view! {
        <tr>
            <td>
                <strong>{task.name.clone()}</strong>
                <p class="muted">{task.description.clone()}</p>
            </td>
            <td>{schedule(&task)}</td>
            <td>{rules}</td>
            <td>
                <button
                    class=if enabled { "btn-enabled" } else { "btn-disabled" }
                    disabled=move || busy.get()
                    on:click=toggle
                >
                    {if enabled { "Running" } else { "Paused" }}
                </button>
            </td>
            <td>
                <button class="btn-danger" disabled=move || busy.get() on:click=remove>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
