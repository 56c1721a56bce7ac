//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Full-width loading spinner with an optional caption
#[component]
pub fn Loading(
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(optional, into)]
    caption: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-center">
            <div class="rounded-full bg-gray-100 dark:bg-gray-700/50 p-4 mb-4">
                <div class="w-8 h-8 rounded-full border-4 border-gray-300 border-t-blue-600 animate-spin" />
            </div>
            {title.map(|t| view! { <h3 class="text-lg font-medium">{t}</h3> })}
            {caption.map(|c| view! {
                <p class="text-gray-500 dark:text-gray-400 max-w-md mt-2">{c}</p>
            })}
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block w-4 h-4 mr-2 rounded-full border-2 border-white/40 border-t-white animate-spin" />
    }
}
