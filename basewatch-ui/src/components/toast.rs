//! Toast Notifications
//!
//! Stack of wallet, registry, analysis and API messages from `GlobalState`.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::toasts::ToastMessage;

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let toasts = state.toasts;

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            <For
                each=move || toasts.with(|queue| queue.items().to_vec())
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: ToastMessage) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = toast.id;

    view! {
        <div
            role="status"
            class=format!(
                "flex items-start gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
                toast.level.bg_class()
            )
        >
            <span class="text-lg leading-none">{toast.level.icon()}</span>
            <div class="flex-1">
                <div class="text-xs uppercase tracking-wide opacity-80">{toast.topic.label()}</div>
                <div class="text-sm font-medium">{toast.text}</div>
            </div>
            <button
                class="opacity-70 hover:opacity-100"
                title="Dismiss"
                on:click=move |_| state.dismiss_toast(id)
            >
                "×"
            </button>
        </div>
    }
}
