//! Overview Page
//!
//! Dashboard landing view: headline stats, trending tokens, watchlist and
//! recent alerts.

use leptos::*;

use crate::components::{Panel, StatCard, TabBar};
use crate::state::placeholders::{self, AlertKind, OVERVIEW_STATS, RECENT_ALERTS};

const OVERVIEW_TABS: &[(&str, &str)] = &[
    ("trending", "Trending Tokens"),
    ("watchlist", "Your Watchlist"),
    ("alerts", "Recent Alerts"),
];

const TRENDING_ROWS: usize = 5;

#[component]
pub fn Overview() -> impl IntoView {
    let selected = create_rw_signal("trending");

    view! {
        <div class="flex flex-col gap-6">
            <div>
                <h1 class="text-3xl font-bold tracking-tight">"Dashboard"</h1>
                <p class="text-gray-500 dark:text-gray-400">
                    "Monitor your Base L2 tokens and get real-time insights"
                </p>
            </div>

            // Stats cards
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                {OVERVIEW_STATS.into_iter().map(|stat| view! {
                    <StatCard title=stat.title value=stat.value note=stat.note />
                }).collect_view()}
            </div>

            <div class="space-y-4">
                <TabBar tabs=OVERVIEW_TABS selected=selected />

                {move || match selected.get() {
                    "watchlist" => view! { <Watchlist /> }.into_view(),
                    "alerts" => view! { <RecentAlerts /> }.into_view(),
                    _ => view! { <TrendingTokens /> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TrendingTokens() -> impl IntoView {
    // Regenerated every time the tab mounts
    let tokens = placeholders::trending_tokens(&mut placeholders::seeded_rng(), TRENDING_ROWS);

    view! {
        <Panel title="Trending Tokens" description="Top performing tokens on Base L2 in the last 24 hours">
            <div class="space-y-4">
                {tokens.into_iter().map(|token| {
                    let change_class = if token.is_gain() { "text-sm text-green-500" } else { "text-sm text-red-500" };
                    view! {
                        <div class="flex items-center justify-between border-b border-gray-200 dark:border-gray-700 pb-2">
                            <div class="flex items-center gap-3">
                                <div class="h-10 w-10 rounded-full bg-blue-500/10" />
                                <div>
                                    <p class="font-medium">{token.name.clone()}</p>
                                    <p class="text-sm text-gray-500">{token.symbol.clone()}</p>
                                </div>
                            </div>
                            <div class="text-right">
                                <p class="font-medium">{token.price_label()}</p>
                                <p class=change_class>{token.change_label()}</p>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </Panel>
    }
}

#[component]
fn Watchlist() -> impl IntoView {
    view! {
        <Panel title="Your Watchlist" description="Tokens you're monitoring on Base L2">
            <p class="text-sm text-gray-500 text-center py-8">
                "You haven't added any tokens to your watchlist yet. Go to the Token Registry to add tokens."
            </p>
        </Panel>
    }
}

#[component]
fn RecentAlerts() -> impl IntoView {
    view! {
        <Panel title="Recent Alerts" description="Price and volume alerts for your tokens">
            <div class="space-y-4">
                {RECENT_ALERTS.into_iter().map(|alert| {
                    let (box_class, text_class) = match alert.kind {
                        AlertKind::Price => (
                            "p-3 rounded-lg bg-yellow-50 dark:bg-yellow-900/20",
                            "text-yellow-800 dark:text-yellow-300",
                        ),
                        AlertKind::Volume => (
                            "p-3 rounded-lg bg-blue-50 dark:bg-blue-900/20",
                            "text-blue-800 dark:text-blue-300",
                        ),
                    };
                    view! {
                        <div class=box_class>
                            <p class=format!("text-sm font-medium {}", text_class)>{alert.message}</p>
                            <p class=format!("text-xs {}", text_class)>{alert.time}</p>
                        </div>
                    }
                }).collect_view()}
            </div>
        </Panel>
    }
}
