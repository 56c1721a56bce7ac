//! Stat Card Component
//!
//! Small titled card with a headline value and a note line.

use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)]
    title: String,
    #[prop(into)]
    value: String,
    #[prop(optional, into)]
    note: Option<String>,
    /// Extra content below the note (badges, bars)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg p-4 border border-gray-200 dark:border-gray-700">
            <div class="text-sm font-medium text-gray-500 dark:text-gray-400">{title}</div>
            <div class="text-2xl font-bold mt-2">{value}</div>
            {note.map(|n| view! {
                <p class="text-xs text-gray-500 dark:text-gray-400">{n}</p>
            })}
            {children.map(|c| c())}
        </div>
    }
}
