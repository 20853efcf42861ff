//! Three-step modal that builds a task: basic info, trigger conditions,
//! then actions.
//!
//! All transitions go through [`WizardState`]; this component only renders
//! it and gates the buttons on `can_advance` / `can_submit`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use robodesk_domain::id::TemplateId;
use robodesk_domain::robot::Robot;
use robodesk_domain::task::{Frequency, Task};
use robodesk_domain::template::CategoryTemplates;
use robodesk_domain::wizard::{WizardState, WizardStep};

use super::{ErrorNote, Loading, use_toasts};
use crate::api;

const STEPS: [WizardStep; 3] = [
    WizardStep::BasicInfo,
    WizardStep::Conditions,
    WizardStep::Actions,
];

#[component]
pub fn TaskWizard(
    robot: Robot,
    #[prop(into)] on_close: Callback<()>,
    /// Called with the created task; the wizard is closed by then.
    #[prop(into)]
    on_created: Callback<Task>,
) -> impl IntoView {
    let toasts = use_toasts();
    let wizard = RwSignal::new(WizardState::new());
    let submitting = RwSignal::new(false);

    let category = robot.category.clone();
    let templates = LocalResource::new(move || {
        let category = category.clone();
        async move { api::fetch_templates(&category).await }
    });

    let robot = StoredValue::new(robot);

    let submit = move |_| {
        let state = wizard.get_untracked();
        let draft = match robot.with_value(|robot| state.submit(robot)) {
            Ok(draft) => draft,
            Err(err) => {
                toasts.error(err.to_string());
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            match api::create_task(&draft).await {
                Ok(task) => {
                    toasts.success(format!("Created \u{201C}{}\u{201D}", task.name));
                    on_close.run(());
                    on_created.run(task);
                }
                Err(err) => {
                    toasts.error(format!("Could not create task: {err}"));
                    submitting.set(false);
                }
            }
        });
    };

    // Field edits update `wizard` on every keystroke; only a step change
    // should rebuild the body.
    let current_step = Memo::new(move |_| wizard.with(WizardState::step));

    let step_body = move || {
        match current_step.get() {
            WizardStep::BasicInfo => view! { <BasicInfoStep wizard/> }.into_any(),
            step => templates
                .read()
                .as_ref()
                .map(|result| match result {
                    Ok(catalog) => {
                        view! { <TemplateStep wizard catalog=catalog.clone() step/> }.into_any()
                    }
                    Err(err) => view! {
                        <ErrorNote context="Failed to load templates" error=err.to_string()/>
                    }
                    .into_any(),
                })
                .unwrap_or_else(|| view! { <Loading/> }.into_any()),
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal wizard">
                <header>
                    <h2>"New task for " {robot.with_value(|robot| robot.name.clone())}</h2>
                    <button class="close" on:click=move |_| on_close.run(())>"\u{00D7}"</button>
                </header>
                <ol class="wizard-steps">
                    {STEPS
                        .into_iter()
                        .map(|step| {
                            let class = move || {
                                let current = current_step.get();
                                if step == current {
                                    "active"
                                } else if step < current {
                                    "done"
                                } else {
                                    ""
                                }
                            };
                            view! { <li class=class>{step.number()} ". " {step.title()}</li> }
                        })
                        .collect_view()}
                </ol>
                <section class="wizard-body">{step_body}</section>
                <footer>
                    <Show when=move || current_step.get() != WizardStep::BasicInfo>
                        <button on:click=move |_| wizard.update(WizardState::retreat)>"Back"</button>
                    </Show>
                    <Show
                        when=move || wizard.with(WizardState::is_last_step)
                        fallback=move || view! {
                            <button
                                class="primary"
                                disabled=move || !wizard.with(WizardState::can_advance)
                                on:click=move |_| {
                                    wizard.update(|w| {
                                        w.try_advance();
                                    });
                                }
                            >
                                "Next"
                            </button>
                        }
                    >
                        <button
                            class="primary"
                            disabled=move || submitting.get() || !wizard.with(WizardState::can_submit)
                            on:click=submit
                        >
                            "Create task"
                        </button>
                    </Show>
                </footer>
            </div>
        </div>
    }
}

#[component]
fn BasicInfoStep(wizard: RwSignal<WizardState>) -> impl IntoView {
    let uses_time = move || wizard.with(|w| w.frequency().uses_time());

    view! {
        <label>
            "Task name"
            <input
                type="text"
                placeholder="e.g. Daily sync"
                prop:value=move || wizard.with(|w| w.name().to_string())
                on:input=move |ev| wizard.update(|w| w.set_name(event_target_value(&ev)))
            />
        </label>
        <label>
            "Description"
            <textarea
                prop:value=move || wizard.with(|w| w.description().to_string())
                on:input=move |ev| wizard.update(|w| w.set_description(event_target_value(&ev)))
            ></textarea>
        </label>
        <label>
            "Frequency"
            <select on:change=move |ev| {
                if let Ok(frequency) = event_target_value(&ev).parse::<Frequency>() {
                    wizard.update(|w| w.set_frequency(frequency));
                }
            }>
                {Frequency::ALL
                    .into_iter()
                    .map(|frequency| {
                        view! {
                            <option
                                value=frequency.as_str()
                                selected=move || wizard.with(|w| w.frequency() == frequency)
                            >
                                {frequency.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
        <Show when=uses_time>
            <label>
                "Time"
                <input
                    type="time"
                    prop:value=move || wizard.with(|w| w.time().to_string())
                    on:input=move |ev| wizard.update(|w| w.set_time(event_target_value(&ev)))
                />
            </label>
        </Show>
    }
}

#[component]
fn TemplateStep(
    wizard: RwSignal<WizardState>,
    catalog: CategoryTemplates,
    step: WizardStep,
) -> impl IntoView {
    let options: Vec<(TemplateId, String, String)> = if step == WizardStep::Conditions {
        catalog
            .conditions
            .into_iter()
            .map(|c| (c.id, c.name, c.description))
            .collect()
    } else {
        catalog
            .actions
            .into_iter()
            .map(|a| (a.id, a.name, a.description))
            .collect()
    };
    let hint = if step == WizardStep::Conditions {
        "Run when any of these happens:"
    } else {
        "Then do all of these:"
    };

    view! {
        <p class="hint">{hint}</p>
        <ul class="template-options">
            {options
                .into_iter()
                .map(|(id, name, description)| {
                    let checked = {
                        let id = id.clone();
                        move || {
                            wizard.with(|w| {
                                if step == WizardStep::Conditions {
                                    w.selected_conditions().contains(&id)
                                } else {
                                    w.selected_actions().contains(&id)
                                }
                            })
                        }
                    };
                    let toggle = move |_| {
                        let id = id.clone();
                        wizard.update(|w| {
                            if step == WizardStep::Conditions {
                                w.toggle_condition(id);
                            } else {
                                w.toggle_action(id);
                            }
                        });
                    };
                    view! {
                        <li>
                            <label>
                                <input type="checkbox" prop:checked=checked on:change=toggle/>
                                <strong>{name}</strong>
                                <span class="muted">{description}</span>
                            </label>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
