//! Side drawer with a robot's quality-inspection records.

use leptos::prelude::*;
use robodesk_domain::inspection::{InspectionSummary, Verdict};
use robodesk_domain::time;

use super::{ErrorNote, Loading};
use crate::api;

fn verdict_badge(verdict: Verdict) -> (&'static str, &'static str) {
    match verdict {
        Verdict::Passed => ("badge badge-running", "Passed"),
        Verdict::Failed => ("badge badge-offline", "Failed"),
        Verdict::NeedsReview => ("badge badge-idle", "Needs review"),
    }
}

#[component]
fn SummaryStrip(summary: InspectionSummary) -> impl IntoView {
    view! {
        <div class="summary-strip">
            <div><strong>{summary.total}</strong><span>"Inspected"</span></div>
            <div><strong>{format!("{:.0}%", summary.pass_rate * 100.0)}</strong><span>"Pass rate"</span></div>
            <div><strong>{format!("{:.1}", summary.average_score)}</strong><span>"Avg. score"</span></div>
            <div><strong>{summary.needs_review}</strong><span>"Needs review"</span></div>
        </div>
    }
}

#[component]
pub fn InspectionDrawer(
    robot_id: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let summary = LocalResource::new({
        let robot_id = robot_id.clone();
        move || {
            let robot_id = robot_id.clone();
            async move { api::fetch_inspection_summary(&robot_id).await }
        }
    });
    let records = LocalResource::new(move || {
        let robot_id = robot_id.clone();
        async move { api::fetch_inspections(&robot_id).await }
    });

    view! {
        <div class="drawer-backdrop" on:click=move |_| on_close.run(())></div>
        <aside class="drawer">
            <header>
                <h2>"Quality inspection"</h2>
                <button class="close" on:click=move |_| on_close.run(())>"\u{00D7}"</button>
            </header>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    summary.read().as_ref().map(|result| match result {
                        Ok(summary) => view! { <SummaryStrip summary=summary.clone()/> }.into_any(),
                        Err(err) => view! {
                            <ErrorNote context="Failed to load summary" error=err.to_string()/>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
            <Suspense fallback=move || view! { <Loading message="Loading records\u{2026}"/> }>
                {move || {
                    records.read().as_ref().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="empty">"No inspections recorded yet."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <ul class="inspection-list">
                                {list
                                    .iter()
                                    .map(|record| {
                                        let (class, label) = verdict_badge(record.verdict);
                                        view! {
                                            <li>
                                                <div class="row">
                                                    <strong>{record.task_name.clone()}</strong>
                                                    <span class=class>{label}</span>
                                                </div>
                                                <div class="row muted">
                                                    <span>{time::to_minutes(&record.inspected_at)}</span>
                                                    <span>{format!("{}/100", record.score)}</span>
                                                </div>
                                                <p>{record.remarks.clone()}</p>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any(),
                        Err(err) => view! {
                            <ErrorNote context="Failed to load inspections" error=err.to_string()/>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </aside>
    }
}
