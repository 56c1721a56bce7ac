//! AI Insights Page
//!
//! Generates a report for one of the listed tokens through the analysis
//! endpoint and shows it alongside the sentiment, prediction and anomaly
//! views.

use leptos::*;

use crate::api::{self, AnalysisResponse};
use crate::components::{AnalysisTabs, InlineLoading};
use crate::pages::analytics::TokenSelect;
use crate::state::global::GlobalState;
use crate::state::placeholders::TokenChoice;
use crate::state::toasts::ToastTopic;

#[component]
pub fn Insights() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let token = create_rw_signal(TokenChoice::default());
    let (generating, set_generating) = create_signal(false);
    let (result, set_result) = create_signal(None::<AnalysisResponse>);

    // A report belongs to the token it was generated for
    create_effect(move |_| {
        token.with(|_| ());
        set_result.set(None);
    });

    let generate_report = move |_| {
        let choice = token.get();
        set_generating.set(true);
        set_result.set(None);

        let state = state.clone();
        spawn_local(async move {
            match api::analyze_token(choice.symbol()).await {
                Ok(analysis) => {
                    settle_report(token, choice, Some(analysis), set_result, set_generating);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error generating report: {}", e).into());
                    if settle_report(token, choice, None, set_result, set_generating) {
                        state.show_error(
                            ToastTopic::Analysis,
                            "Failed to analyze token. Please try again.",
                        );
                    }
                }
            }
        });
    };

    let subject = Signal::derive(move || token.get().symbol().to_string());

    view! {
        <div class="flex flex-col gap-6">
            <div class="flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h1 class="text-3xl font-bold tracking-tight">"AI Insights"</h1>
                    <p class="text-gray-500 dark:text-gray-400">"AI-powered analysis and insights for your tokens"</p>
                </div>
                <div class="flex items-center gap-2">
                    <TokenSelect token=token />
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
            </div>

            <AnalysisTabs
                subject=subject
                generating=generating
                result=result
                forecasts=Signal::derive(move || token.get().forecasts())
                accuracy_scope=Signal::derive(move || format!("{} predictions", subject.get()))
            />
        </div>
    }
}

/// Apply a finished report request to the page.
///
/// The report is kept only while the requested token is still selected.
/// Returns `false` when the page was left before the request finished.
fn settle_report(
    token: RwSignal<TokenChoice>,
    requested: TokenChoice,
    analysis: Option<AnalysisResponse>,
    set_result: WriteSignal<Option<AnalysisResponse>>,
    set_generating: WriteSignal<bool>,
) -> bool {
    let Some(current) = token.try_get_untracked() else {
        return false;
    };

    if current == requested && analysis.is_some() {
        set_result.try_set(analysis);
    }
    set_generating.try_set(false);
    true
}
