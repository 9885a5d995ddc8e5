use leptos::*;

use crate::global_state::{ToastEntry, dismiss_toast, toasts};

/// Corner stack of the global toasts
#[component]
pub fn Toaster() -> impl IntoView {
    view! {
        <div class="toaster" aria-live="polite">
            <For each=move || toasts().get() key=|entry| entry.id children=move |entry: ToastEntry| {
                let id = entry.id;
                let class = format!("toast {}", entry.toast.variant);
                view! {
                    <div class=class role="status">
                        <div>
                            <p class="toast-title">{entry.toast.title}</p>
                            <p class="toast-description">{entry.toast.description}</p>
                        </div>
                        <button
                            type="button"
                            class="toast-close"
                            aria-label="Dismiss"
                            on:click=move |_| dismiss_toast(id)
                        >
                            "✕"
                        </button>
                    </div>
                }
            }/>
        </div>
    }
}
