//! Panel Component

use leptos::*;

/// Titled card wrapping a section of a page
#[component]
pub fn Panel(
    #[prop(into)]
    title: String,
    #[prop(into)]
    description: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-white dark:bg-gray-800 rounded-xl p-6 border border-gray-200 dark:border-gray-700">
            <h2 class="text-xl font-semibold">{title}</h2>
            <p class="text-gray-500 dark:text-gray-400 mb-4">{move || description.get()}</p>
            {children()}
        </section>
    }
}
