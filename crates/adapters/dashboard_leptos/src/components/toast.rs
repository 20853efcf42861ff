//! Transient notifications for finished and failed actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays up before it dismisses itself.
const TOAST_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    id: u32,
    kind: ToastKind,
    text: String,
}

/// Handle for raising toasts from any component under [`ToastContainer`].
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    /// Confirm a finished action.
    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    /// Report a failed action.
    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(&self, kind: ToastKind, text: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.list.update(|list| list.push(Toast { id, kind, text }));

        let handle = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            handle.dismiss(id);
        });
    }

    fn dismiss(&self, id: u32) {
        self.list.update(|list| list.retain(|t| t.id != id));
    }
}

/// Access the toast handle from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts not found in context")
}

/// Provides [`Toasts`] to `children` and renders the active toasts on top.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let toasts = Toasts {
        list: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || toasts.list.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <button class="toast-dismiss" on:click=move |_| toasts.dismiss(id)>
                                "\u{00D7}"
                            </button>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
