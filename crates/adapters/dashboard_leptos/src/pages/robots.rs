use leptos::prelude::*;

use crate::api;
use crate::components::{ErrorNote, Loading, RobotCard};

/// Grid of every digital employee.
#[component]
pub fn Robots() -> impl IntoView {
    let robots = LocalResource::new(api::fetch_robots);

    view! {
        <div>
            <h1>"Digital employees"</h1>
            <Suspense fallback=move || view! { <Loading message="Loading robots\u{2026}"/> }>
                {move || {
                    robots.read().as_ref().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="empty">"No robots yet."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <div class="robot-grid">
                                {list
                                    .iter()
                                    .cloned()
                                    .map(|robot| view! { <RobotCard robot/> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                        Err(err) => view! {
                            <ErrorNote context="Failed to load robots" error=err.to_string()/>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
