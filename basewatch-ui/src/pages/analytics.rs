//! Analytics Page
//!
//! Per-token charts (placeholders), recent transactions, top holders and key
//! metrics.

use leptos::*;

use crate::components::{ChartPlaceholder, Panel, TabBar};
use crate::state::placeholders::{self, Timeframe, TokenChoice};

const ANALYTICS_TABS: &[(&str, &str)] = &[
    ("transactions", "Transactions"),
    ("holders", "Top Holders"),
    ("metrics", "Key Metrics"),
    ("correlation", "Correlation"),
];

const LIST_ROWS: usize = 5;

#[component]
pub fn Analytics() -> impl IntoView {
    let token = create_rw_signal(TokenChoice::default());
    let timeframe = create_rw_signal(Timeframe::default());
    let selected = create_rw_signal("transactions");

    let symbol = Signal::derive(move || token.get().symbol().to_string());

    view! {
        <div class="flex flex-col gap-6">
            <div class="flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h1 class="text-3xl font-bold tracking-tight">"Analytics"</h1>
                    <p class="text-gray-500 dark:text-gray-400">"In-depth analysis of token performance"</p>
                </div>
                <div class="flex flex-col sm:flex-row gap-2">
                    <TokenSelect token=token />
                    <select
                        class="w-24 bg-white dark:bg-gray-800 rounded-lg px-3 py-2 border border-gray-300 dark:border-gray-600"
                        on:change=move |ev| {
                            if let Some(t) = Timeframe::from_key(&event_target_value(&ev)) {
                                timeframe.set(t);
                            }
                        }
                    >
                        {Timeframe::ALL.into_iter().map(|t| view! {
                            <option value=t.key() selected=move || timeframe.get() == t>{t.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="grid gap-6 md:grid-cols-2">
                <div class="md:col-span-2">
                    <Panel
                        title="Price Chart"
                        description=Signal::derive(move || {
                            format!("{} price over {}", symbol.get(), timeframe.get().description())
                        })
                    >
                        <ChartPlaceholder
                            height="h-80"
                            caption=Signal::derive(move || {
                                format!("Price chart for {} over {}", symbol.get(), timeframe.get().key())
                            })
                        />
                    </Panel>
                </div>

                <Panel
                    title="Trading Volume"
                    description=Signal::derive(move || format!("Daily trading volume for {}", symbol.get()))
                >
                    <ChartPlaceholder caption=Signal::derive(move || format!("Volume chart for {}", symbol.get())) />
                </Panel>

                <Panel
                    title="Liquidity Analysis"
                    description=Signal::derive(move || format!("DEX liquidity pools for {}", symbol.get()))
                >
                    <ChartPlaceholder caption=Signal::derive(move || format!("Liquidity chart for {}", symbol.get())) />
                </Panel>
            </div>

            <div class="space-y-4">
                <TabBar tabs=ANALYTICS_TABS selected=selected />

                {move || match selected.get() {
                    "holders" => view! { <TopHolders symbol=symbol /> }.into_view(),
                    "metrics" => view! { <KeyMetricsGrid token=token /> }.into_view(),
                    "correlation" => view! {
                        <Panel
                            title="Price Correlation"
                            description=Signal::derive(move || {
                                format!("How {} price correlates with other assets", symbol.get())
                            })
                        >
                            <ChartPlaceholder
                                height="h-80"
                                caption=Signal::derive(move || format!("Correlation chart for {}", symbol.get()))
                            />
                        </Panel>
                    }.into_view(),
                    _ => view! { <RecentTransactions symbol=symbol /> }.into_view(),
                }}
            </div>
        </div>
    }
}

/// ETH / USDC / NEW selector
#[component]
pub fn TokenSelect(token: RwSignal<TokenChoice>) -> impl IntoView {
    view! {
        <select
            class="w-40 bg-white dark:bg-gray-800 rounded-lg px-3 py-2 border border-gray-300 dark:border-gray-600"
            on:change=move |ev| {
                if let Some(t) = TokenChoice::from_symbol(&event_target_value(&ev)) {
                    token.set(t);
                }
            }
        >
            {TokenChoice::ALL.into_iter().map(|t| view! {
                <option value=t.symbol() selected=move || token.get() == t>{t.name()}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
fn RecentTransactions(symbol: Signal<String>) -> impl IntoView {
    let time = chrono::Local::now().format("%H:%M:%S").to_string();
    let transactions = placeholders::recent_transactions(&mut placeholders::seeded_rng(), LIST_ROWS, &time);

    view! {
        <Panel
            title="Recent Transactions"
            description=Signal::derive(move || format!("Latest {} transfers on Base L2", symbol.get()))
        >
            <div class="space-y-4">
                {transactions.into_iter().map(|tx| view! {
                    <div class="flex justify-between items-center py-2 border-b border-gray-200 dark:border-gray-700">
                        <div>
                            <div class="font-mono text-xs text-gray-500">{tx.hash.clone()}</div>
                            <div class="text-sm">{format!("{} • {}", tx.kind, tx.time)}</div>
                        </div>
                        <div class="text-right">
                            <div class="font-medium">{move || format!("{} {}", tx.amount, symbol.get())}</div>
                            <div class="text-sm text-gray-500">{format!("${}", tx.value)}</div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </Panel>
    }
}

#[component]
fn TopHolders(symbol: Signal<String>) -> impl IntoView {
    view! {
        <Panel
            title="Top Token Holders"
            description=Signal::derive(move || format!("Addresses holding the largest amounts of {}", symbol.get()))
        >
            <div class="space-y-4">
                {placeholders::top_holders(LIST_ROWS).into_iter().map(|holder| view! {
                    <div class="flex justify-between items-center py-2 border-b border-gray-200 dark:border-gray-700">
                        <div class="flex items-center gap-2">
                            <div class="font-medium">{format!("#{}", holder.rank)}</div>
                            <div class="font-mono text-xs">{holder.address.clone()}</div>
                        </div>
                        <div class="text-right">
                            <div class="font-medium">{move || format!("{} {}", holder.amount, symbol.get())}</div>
                            <div class="text-sm text-gray-500">{format!("{} of supply", holder.share)}</div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </Panel>
    }
}

#[component]
fn KeyMetricsGrid(token: RwSignal<TokenChoice>) -> impl IntoView {
    view! {
        <Panel
            title="Key Token Metrics"
            description=Signal::derive(move || format!("Performance metrics for {}", token.get().symbol()))
        >
            {move || {
                let metrics = token.get().key_metrics();
                let cells = [
                    ("Market Cap", metrics.market_cap),
                    ("24h Volume", metrics.volume_24h),
                    ("Circulating Supply", metrics.circulating_supply),
                    ("Holders", metrics.holders),
                ];
                view! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        {cells.into_iter().map(|(label, value)| view! {
                            <div class="bg-gray-100 dark:bg-gray-900/50 p-4 rounded-lg">
                                <div class="text-sm text-gray-500">{label}</div>
                                <div class="text-2xl font-bold">{value}</div>
                            </div>
                        }).collect_view()}
                    </div>
                }
            }}
        </Panel>
    }
}
