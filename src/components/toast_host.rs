//! Stack of dismissible notifications rendered over the page.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn ToastHost(toasts: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Info => "toast toast--info",
                            ToastKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class role="alert">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
