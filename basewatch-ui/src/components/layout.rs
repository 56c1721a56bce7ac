//! Dashboard Layout
//!
//! Sidebar navigation, header, and the outlet for nested dashboard routes.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("Overview", "/dashboard"),
    ("Token Registry", "/dashboard/tokens"),
    ("Analytics", "/dashboard/analytics"),
    ("AI Insights", "/dashboard/insights"),
    ("Settings", "/dashboard/settings"),
];

/// Shared shell for every `/dashboard` route
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (sidebar_open, set_sidebar_open) = create_signal(false);

    view! {
        <div class="min-h-screen">
            // Mobile sidebar backdrop
            <Show when=move || sidebar_open.get()>
                <div
                    class="fixed inset-0 z-40 bg-black/40 md:hidden"
                    on:click=move |_| set_sidebar_open.set(false)
                />
            </Show>

            // Sidebar
            <aside class=move || format!(
                "fixed inset-y-0 left-0 z-50 w-64 transform bg-white dark:bg-gray-800 border-r \
                 border-gray-200 dark:border-gray-700 transition-transform duration-200 md:translate-x-0 {}",
                if sidebar_open.get() { "translate-x-0" } else { "-translate-x-full" }
            )>
                <div class="flex h-16 items-center justify-between px-4 border-b border-gray-200 dark:border-gray-700">
                    <A href="/" class="font-bold text-lg">"Base L2 Monitor"</A>
                    <button
                        class="md:hidden text-xl"
                        on:click=move |_| set_sidebar_open.set(false)
                    >
                        "✕"
                    </button>
                </div>

                <nav class="flex flex-col gap-1 p-4">
                    {NAV_ITEMS.into_iter().map(|(label, href)| view! {
                        <SidebarLink href=href label=label />
                    }).collect_view()}
                </nav>

                <div class="absolute bottom-0 w-full p-4 border-t border-gray-200 dark:border-gray-700">
                    <div class="flex items-center justify-between">
                        <span class="text-sm text-gray-500">{concat!("v", env!("CARGO_PKG_VERSION"))}</span>
                        <ThemeToggle />
                    </div>
                </div>
            </aside>

            // Main content
            <div class="md:pl-64">
                <header class="sticky top-0 z-30 border-b border-gray-200 dark:border-gray-700 \
                               bg-white/95 dark:bg-gray-900/95 backdrop-blur">
                    <div class="flex h-16 items-center justify-between px-4">
                        <button
                            class="md:hidden text-xl"
                            on:click=move |_| set_sidebar_open.set(true)
                        >
                            "☰"
                        </button>
                        <div class="ml-auto flex items-center space-x-4">
                            <ApiStatus />
                            <A
                                href="/auth"
                                class="px-3 py-1.5 rounded-md border border-gray-300 dark:border-gray-600 text-sm"
                            >
                                <span class="inline-block w-24 truncate">{move || state.wallet_label()}</span>
                            </A>
                        </div>
                    </div>
                </header>

                <main class="p-4 md:p-6">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}

#[component]
fn SidebarLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-3 py-2 rounded-md text-sm text-gray-600 dark:text-gray-300 \
                   hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
            active_class="bg-gray-100 dark:bg-gray-700 font-medium text-gray-900 dark:text-white"
        >
            {label}
        </A>
    }
}

/// Light/dark switch
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    view! {
        <button
            class="p-2 rounded-md hover:bg-gray-100 dark:hover:bg-gray-700"
            title="Toggle theme"
            on:click=move |_| state.toggle_theme()
        >
            {move || theme.get().toggle_icon()}
        </button>
    }
}

/// Dot showing whether the API answers `/health`
#[component]
fn ApiStatus() -> impl IntoView {
    let (health, set_health) = create_signal(None::<Result<String, String>>);

    spawn_local(async move {
        let result = api::check_health().await.map(|h| h.status);
        set_health.try_set(Some(result));
    });

    view! {
        {move || {
            let (color, title) = match health.get() {
                None => ("bg-gray-400", "Checking API".to_string()),
                Some(Ok(status)) => ("bg-green-500", format!("API {}", status)),
                Some(Err(e)) => ("bg-red-500", format!("API unreachable: {}", e)),
            };
            view! { <span class=format!("w-2 h-2 rounded-full {}", color) title=title /> }
        }}
    }
}
