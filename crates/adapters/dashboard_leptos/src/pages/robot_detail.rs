//! Robot detail page: profile, tasks, and the wizard, inspection and unbind
//! overlays.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use robodesk_domain::robot::Robot;

use crate::api;
use crate::components::{
    ErrorNote, InspectionDrawer, Loading, TaskPanel, TaskWizard, UnbindModal, category_label,
    status_badge,
};

/// Which overlay, if any, covers the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    None,
    Wizard,
    Inspections,
    Unbind,
}

#[component]
pub fn RobotDetail() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    let robot_version = RwSignal::new(0_u32);
    let task_version = RwSignal::new(0_u32);
    let overlay = RwSignal::new(Overlay::None);

    let robot = LocalResource::new(move || {
        robot_version.track();
        let robot_id = id();
        async move { api::fetch_robot(&robot_id).await }
    });
    let tasks = LocalResource::new(move || {
        task_version.track();
        let robot_id = id();
        async move { api::fetch_tasks(&robot_id).await }
    });

    let close = Callback::new(move |()| overlay.set(Overlay::None));
    let refresh_tasks = Callback::new(move |()| task_version.update(|v| *v += 1));

    let profile = move |robot: &Robot| {
        let (badge_class, badge_text) = status_badge(robot.status);
        let bound = robot.bound_account.clone();
        view! {
            <div class="card robot-profile">
                <div class="row">
                    <h1>{robot.name.clone()}</h1>
                    <span class=badge_class>{badge_text}</span>
                </div>
                <p class="category">{category_label(&robot.category)}</p>
                <p>{robot.description.clone()}</p>
                {match bound {
                    Some(account) => view! {
                        <p class="account">
                            <strong>"Account: "</strong>
                            {account.account_name} " on " {account.platform}
                            <button class="link" on:click=move |_| overlay.set(Overlay::Unbind)>
                                "Unbind"
                            </button>
                        </p>
                    }
                    .into_any(),
                    None => view! { <p class="account muted">"No account bound"</p> }.into_any(),
                }}
                <div class="actions">
                    <button class="primary" on:click=move |_| overlay.set(Overlay::Wizard)>
                        "New task"
                    </button>
                    <button on:click=move |_| overlay.set(Overlay::Inspections)>
                        "Quality inspection"
                    </button>
                </div>
            </div>
        }
    };

    let overlay_view = move || {
        let current = overlay.get();
        let loaded = robot.read().as_ref().and_then(|result| result.as_ref().ok().cloned())?;
        match current {
            Overlay::None => None,
            Overlay::Wizard => Some(
                view! {
                    <TaskWizard
                        robot=loaded
                        on_close=close
                        on_created=move |_| refresh_tasks.run(())
                    />
                }
                .into_any(),
            ),
            Overlay::Inspections => Some(
                view! { <InspectionDrawer robot_id=loaded.id.to_string() on_close=close/> }
                    .into_any(),
            ),
            Overlay::Unbind => Some(
                view! {
                    <UnbindModal
                        robot=loaded
                        on_close=close
                        on_unbound=move |_| robot_version.update(|v| *v += 1)
                    />
                }
                .into_any(),
            ),
        }
    };

    view! {
        <div>
            <p><A href="/">"\u{2190} All robots"</A></p>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    robot.read().as_ref().map(|result| match result {
                        Ok(robot) => profile(robot).into_any(),
                        Err(err) => view! {
                            <ErrorNote context="Failed to load robot" error=err.to_string()/>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>

            <h2>"Tasks"</h2>
            <Suspense fallback=move || view! { <Loading message="Loading tasks\u{2026}"/> }>
                {move || {
                    tasks.read().as_ref().map(|result| match result {
                        Ok(list) => view! {
                            <TaskPanel tasks=list.clone() on_change=refresh_tasks/>
                        }
                        .into_any(),
                        Err(err) => view! {
                            <ErrorNote context="Failed to load tasks" error=err.to_string()/>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>

            {overlay_view}
        </div>
    }
}
