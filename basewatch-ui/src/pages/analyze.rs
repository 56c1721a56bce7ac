//! Token Analyzer Page
//!
//! Standalone analyzer for any address. Only a non-empty check happens in
//! the browser; the server derives the symbol.

use leptos::*;
use leptos_router::*;

use crate::api::{self, AnalysisResponse};
use crate::components::{AnalysisTabs, InlineLoading, Panel};
use crate::state::global::GlobalState;
use crate::state::placeholders;
use crate::state::toasts::ToastTopic;

#[component]
pub fn Analyze() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (address, set_address) = create_signal(String::new());
    let (generating, set_generating) = create_signal(false);
    let (result, set_result) = create_signal(None::<AnalysisResponse>);

    let generate_report = move |_| {
        let candidate = address.get();
        if candidate.is_empty() {
            state.show_error(ToastTopic::Analysis, "Please enter a token address");
            return;
        }

        set_generating.set(true);
        set_result.set(None);

        let state = state.clone();
        spawn_local(async move {
            match api::analyze_token(&candidate).await {
                Ok(analysis) => {
                    set_result.try_set(Some(analysis));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error generating report: {}", e).into());
                    state.show_error(ToastTopic::Analysis, "Failed to analyze token. Please try again.");
                }
            }
            set_generating.try_set(false);
        });
    };

    // While generating the captions name the address; afterwards the symbol
    let subject = Signal::derive(move || {
        if generating.get() {
            return address.get();
        }
        result
            .get()
            .map(|r| r.symbol)
            .unwrap_or_else(|| "your token".to_string())
    });

    view! {
        <div class="container mx-auto px-4 py-12 max-w-5xl">
            <div class="flex flex-col gap-6">
                <div class="flex items-center justify-between">
                    <div class="flex flex-col gap-2">
                        <h1 class="text-3xl font-bold tracking-tight">"Token AI Analyzer"</h1>
                        <p class="text-gray-500 dark:text-gray-400">"AI-powered analysis and insights for any token"</p>
                    </div>
                    <A href="/dashboard" class="text-sm text-blue-600 hover:underline">"Dashboard →"</A>
                </div>

                <Panel title="Enter Token Address" description="Paste any token address to generate an AI analysis report">
                    <div class="flex flex-col gap-4 sm:flex-row">
                        <input
                            type="text"
                            placeholder="0x..."
                            prop:value=move || address.get()
                            on:input=move |ev| set_address.set(event_target_value(&ev))
                            class="flex-1 bg-gray-50 dark:bg-gray-700 rounded-lg px-3 py-2 font-mono text-sm \
                                   border border-gray-300 dark:border-gray-600 focus:border-blue-500 focus:outline-none"
                        />
                        <button
                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-blue-400 text-white rounded-lg font-medium"
                            on:click=generate_report
                            disabled=move || generating.get()
                        >
                            {move || if generating.get() {
                                view! { <InlineLoading />"Generating..." }.into_view()
                            } else {
                                "Generate Report".into_view()
                            }}
                        </button>
                    </div>
                </Panel>

                <Show when=move || generating.get() || result.with(Option::is_some)>
                    <AnalysisTabs
                        subject=subject
                        generating=generating
                        result=result
                        forecasts=Signal::derive(placeholders::analyzer_forecasts)
                        accuracy_scope="similar tokens"
                    />
                </Show>
            </div>
        </div>
    }
}
