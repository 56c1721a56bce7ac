//! Analysis Tabs
//!
//! The four-tab report view shared by the AI Insights page and the
//! standalone analyzer: generated report with metric cards, sentiment,
//! price predictions, and anomalies.

use leptos::*;

use crate::api::AnalysisResponse;
use crate::components::{Loading, Panel, StatCard, TabBar};
use crate::state::placeholders::{self, Forecast, Priority, PREDICTION_ACCURACY, SENTIMENT_SOURCES};

const ANALYSIS_TABS: &[(&str, &str)] = &[
    ("automated", "Automated Analysis"),
    ("sentiment", "Sentiment Analysis"),
    ("predictions", "Price Predictions"),
    ("anomalies", "Anomaly Detection"),
];

/// `1240` -> `"1,240"`
pub fn group_digits(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
pub fn AnalysisTabs(
    /// Token name used in captions
    #[prop(into)]
    subject: Signal<String>,
    #[prop(into)]
    generating: Signal<bool>,
    #[prop(into)]
    result: Signal<Option<AnalysisResponse>>,
    #[prop(into)]
    forecasts: Signal<[Forecast; 3]>,
    /// Trailing phrase of the accuracy caption
    #[prop(into)]
    accuracy_scope: MaybeSignal<String>,
) -> impl IntoView {
    let selected = create_rw_signal("automated");

    view! {
        <div class="space-y-4">
            <TabBar tabs=ANALYSIS_TABS selected=selected />

            {move || match selected.get() {
                "sentiment" => view! { <SentimentTab subject=subject /> }.into_view(),
                "predictions" => view! {
                    <PredictionsTab subject=subject forecasts=forecasts accuracy_scope=accuracy_scope.clone() />
                }.into_view(),
                "anomalies" => view! { <AnomaliesTab subject=subject /> }.into_view(),
                _ => view! {
                    <ReportTab subject=subject generating=generating result=result />
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ReportTab(
    subject: Signal<String>,
    generating: Signal<bool>,
    result: Signal<Option<AnalysisResponse>>,
) -> impl IntoView {
    view! {
        <Panel
            title="Generated Analysis Report"
            description=Signal::derive(move || format!("Comprehensive AI analysis for {}", subject.get()))
        >
            {move || {
                if generating.get() {
                    view! {
                        <Loading
                            title="Generating Report..."
                            caption=format!("Our AI is analyzing {} and generating a comprehensive report.", subject.get())
                        />
                    }.into_view()
                } else if let Some(analysis) = result.get() {
                    view! {
                        <pre class="bg-gray-100 dark:bg-gray-900/50 p-4 rounded-lg whitespace-pre-wrap font-mono text-sm">
                            {analysis.report}
                        </pre>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex flex-col items-center justify-center py-12 text-center">
                            <h3 class="text-lg font-medium">"No Report Generated"</h3>
                            <p class="text-gray-500 dark:text-gray-400 max-w-md mt-2">
                                {format!(
                                    "Click the \"Generate Report\" button to create an AI-powered analysis report for {}.",
                                    subject.get()
                                )}
                            </p>
                        </div>
                    }.into_view()
                }
            }}
        </Panel>

        {move || result.get().filter(|_| !generating.get()).map(|analysis| {
            let metrics = analysis.metrics;
            let indicators = metrics.technical.indicators;
            let risk_width = format!("width: {:.0}%", metrics.risk_score * 10.0);

            view! {
                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3 mt-4">
                    <StatCard
                        title="Risk Score"
                        value=format!("{}/10", metrics.risk_score)
                        note=metrics.risk_label()
                    >
                        <div class="mt-2 h-2 w-full bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                            <div class="bg-yellow-500 h-full rounded-full" style=risk_width />
                        </div>
                    </StatCard>

                    <StatCard
                        title="Social Sentiment"
                        value=format!("{}%", metrics.sentiment.positive)
                        note="Positive Mentions"
                    >
                        <div class="mt-2 flex items-center gap-2">
                            <span class="px-2 py-0.5 rounded bg-green-500 text-white text-xs">"Bullish"</span>
                            <span class="px-2 py-0.5 rounded border text-xs">
                                {format!("{} Mentions", group_digits(metrics.sentiment.mentions))}
                            </span>
                        </div>
                    </StatCard>

                    <StatCard
                        title="Technical Rating"
                        value=metrics.technical.rating.clone()
                        note="8/10 indicators positive"
                    >
                        <div class="mt-2 flex items-center gap-3 text-sm font-medium">
                            <Indicator label="MACD" positive=indicators.macd color="text-green-500" />
                            <Indicator label="RSI" positive=indicators.rsi color="text-yellow-500" />
                            <Indicator label="Stoch" positive=indicators.stoch color="text-red-500" />
                        </div>
                    </StatCard>
                </div>
            }
        })}
    }
}

#[component]
fn Indicator(label: &'static str, positive: bool, color: &'static str) -> impl IntoView {
    let mark = if positive { "✓" } else { "✕" };

    view! {
        <span class=color>{mark}" "{label}</span>
    }
}

#[component]
fn SentimentTab(subject: Signal<String>) -> impl IntoView {
    view! {
        <Panel
            title="Social Media & News Sentiment"
            description=Signal::derive(move || format!("Analysis of {} mentions across platforms", subject.get()))
        >
            <ChartPlaceholder caption=Signal::derive(move || format!("Sentiment analysis chart for {}", subject.get())) />

            <div class="grid gap-4 grid-cols-1 md:grid-cols-3 mt-6">
                {SENTIMENT_SOURCES.into_iter().map(|source| {
                    let badge = if source.positive {
                        "px-2 py-0.5 rounded bg-green-500 text-white text-xs"
                    } else {
                        "px-2 py-0.5 rounded border text-xs"
                    };
                    view! {
                        <div class="p-4 bg-gray-100 dark:bg-gray-900/50 rounded-lg">
                            <div class="flex justify-between items-center mb-2">
                                <h4 class="font-medium">{source.platform}</h4>
                                <span class=badge>{source.mood}</span>
                            </div>
                            <p class="text-sm text-gray-500">{format!("Sentiment score: {}", source.score)}</p>
                            <p class="text-sm mt-2">{source.activity}</p>
                        </div>
                    }
                }).collect_view()}
            </div>
        </Panel>
    }
}

#[component]
fn PredictionsTab(
    subject: Signal<String>,
    forecasts: Signal<[Forecast; 3]>,
    accuracy_scope: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <Panel
            title="Price Predictions"
            description=Signal::derive(move || format!("AI-generated price forecasts for {}", subject.get()))
        >
            <ChartPlaceholder caption=Signal::derive(move || format!("Price prediction chart for {}", subject.get())) />

            <div class="grid gap-4 grid-cols-1 md:grid-cols-3 mt-6">
                {move || forecasts.get().into_iter().map(|forecast| view! {
                    <div class="p-4 bg-gray-100 dark:bg-gray-900/50 rounded-lg">
                        <div class="text-sm text-gray-500">{forecast.horizon}</div>
                        <div class="text-2xl font-bold">{forecast.price}</div>
                        <div class="text-sm text-green-500">{forecast.change}</div>
                    </div>
                }).collect_view()}
            </div>

            <div class="mt-6 p-4 rounded-lg border border-gray-200 dark:border-gray-700">
                <h4 class="font-medium mb-2">"Prediction Accuracy"</h4>
                <p class="text-sm text-gray-500 mb-4">
                    {move || format!("Our AI model's historical accuracy for {}:", accuracy_scope.get())}
                </p>
                <div class="grid gap-4 grid-cols-2 md:grid-cols-3">
                    {PREDICTION_ACCURACY.into_iter().map(|(label, value)| view! {
                        <div>
                            <div class="text-sm text-gray-500">{label}</div>
                            <div class="font-medium">{value}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </Panel>
    }
}

#[component]
fn AnomaliesTab(subject: Signal<String>) -> impl IntoView {
    view! {
        <Panel
            title="Anomaly Detection"
            description=Signal::derive(move || format!("Unusual patterns and activities for {}", subject.get()))
        >
            <div class="space-y-4">
                {move || placeholders::anomalies(&subject.get()).into_iter().map(|anomaly| {
                    let priority_class = match anomaly.priority {
                        Priority::High => "px-2 py-0.5 rounded bg-red-500 text-white text-xs",
                        _ => "px-2 py-0.5 rounded border text-xs",
                    };
                    view! {
                        <div class="p-4 border border-gray-200 dark:border-gray-700 rounded-lg">
                            <h4 class="font-medium">{anomaly.title}</h4>
                            <p class="text-sm text-gray-500 mt-1">{anomaly.description}</p>
                            <div class="flex items-center gap-2 mt-2">
                                <span class="px-2 py-0.5 rounded border text-xs">{anomaly.category}</span>
                                <span class=priority_class>{anomaly.priority.label()}</span>
                                <span class="text-xs text-gray-500">{anomaly.age}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </Panel>
    }
}

/// Grey box standing in for a chart
#[component]
pub fn ChartPlaceholder(
    #[prop(into)]
    caption: Signal<String>,
    #[prop(default = "h-64")]
    height: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{} w-full bg-gray-100 dark:bg-gray-900/50 rounded-md flex items-center justify-center",
            height
        )>
            <p class="text-gray-500">{move || caption.get()}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1240), "1,240");
        assert_eq!(group_digits(1234567), "1,234,567");
    }
}
