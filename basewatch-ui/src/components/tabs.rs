//! Tab Bar Component

use leptos::*;

/// Row of tab buttons; `tabs` holds `(key, label)` pairs
#[component]
pub fn TabBar(
    tabs: &'static [(&'static str, &'static str)],
    selected: RwSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="inline-flex flex-wrap gap-1 bg-gray-100 dark:bg-gray-800 rounded-lg p-1">
            {tabs.iter().map(|&(key, label)| {
                view! {
                    <button
                        on:click=move |_| selected.set(key)
                        class=move || {
                            let base = "px-3 py-1.5 rounded-md text-sm font-medium transition-colors";
                            if selected.get() == key {
                                format!("{} bg-white dark:bg-gray-700 shadow", base)
                            } else {
                                format!("{} text-gray-500 hover:text-gray-900 dark:hover:text-white", base)
                            }
                        }
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
