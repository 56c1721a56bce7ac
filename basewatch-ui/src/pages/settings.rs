//! Settings Page
//!
//! API connection and display preferences.

use leptos::*;

use crate::api;
use crate::components::layout::ThemeToggle;
use crate::components::Panel;
use crate::state::global::GlobalState;
use crate::state::toasts::ToastTopic;

#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6">
            <div>
                <h1 class="text-3xl font-bold tracking-tight">"Settings"</h1>
                <p class="text-gray-500 dark:text-gray-400">"Configure your Base L2 monitor"</p>
            </div>

            <ApiSettings />
            <DisplaySettings />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<Result<api::HealthResponse, String>>);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        api::set_api_base(&api_url.get());

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            let result = api::check_health().await;
            match &result {
                Ok(_) => state_clone.show_success(ToastTopic::Api, "Connection successful!"),
                Err(e) => state_clone.show_error(ToastTopic::Api, &format!("Connection failed: {}", e)),
            }
            set_test_result.try_set(Some(result));
            set_testing.try_set(false);
        });
    };

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        set_api_url.set(api::get_api_base());
        state.show_success(ToastTopic::Api, "API URL saved");
    };

    let reset_url = move |_| {
        set_api_url.set(api::DEFAULT_API_BASE.to_string());
    };

    view! {
        <Panel title="API Connection" description="Where the dashboard sends analysis requests">
            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Basewatch API URL"</label>
                    <div class="flex flex-wrap gap-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-50 dark:bg-gray-700 rounded-lg px-4 py-2
                                   border border-gray-300 dark:border-gray-600 focus:border-blue-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 disabled:opacity-50"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium"
                        >
                            "Save"
                        </button>
                        <button
                            on:click=reset_url
                            class="px-4 py-2 rounded-lg text-gray-500 hover:text-gray-900 dark:hover:text-white"
                        >
                            "Reset"
                        </button>
                    </div>
                </div>

                // Connection status
                <div class="flex items-center space-x-2 text-sm">
                    <span class="text-gray-500">"Status:"</span>
                    {move || match test_result.get() {
                        Some(Ok(health)) => view! {
                            <span class="text-green-500">
                                {format!(
                                    "✓ Connected (v{}, analysis delay {} ms)",
                                    health.version, health.analysis_delay_ms
                                )}
                            </span>
                        }.into_view(),
                        Some(Err(_)) => view! { <span class="text-red-500">"✕ Failed"</span> }.into_view(),
                        None => view! { <span class="text-gray-500">"Not tested"</span> }.into_view(),
                    }}
                </div>
            </div>
        </Panel>
    }
}

/// Display settings
#[component]
fn DisplaySettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    view! {
        <Panel title="Display" description="Appearance of the dashboard">
            <div class="flex items-center justify-between max-w-xs">
                <span class="text-sm">{move || format!("Theme: {}", theme.get().label())}</span>
                <ThemeToggle />
            </div>
        </Panel>
    }
}
