//! Wallet Connect Page
//!
//! Mock wallet connection; no wallet provider is contacted.

use leptos::*;
use leptos_router::*;

use crate::components::InlineLoading;
use crate::state::global::GlobalState;

const CONNECT_DELAY_MS: u32 = 1500;

#[component]
pub fn Auth() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (connecting, set_connecting) = create_signal(false);
    let wallet = state.wallet;

    let connect_wallet = move |_| {
        set_connecting.set(true);

        let state = state.clone();
        gloo_timers::callback::Timeout::new(CONNECT_DELAY_MS, move || {
            set_connecting.try_set(false);
            state.connect_wallet();
        })
        .forget();
    };

    view! {
        <main class="container mx-auto py-12 px-4 flex flex-col items-center justify-center min-h-screen">
            <A href="/" class="absolute top-4 left-4">"← Back"</A>

            <div class="w-full max-w-md bg-white dark:bg-gray-800 rounded-xl p-6 border border-gray-200 dark:border-gray-700 space-y-4">
                <div>
                    <h1 class="text-xl font-semibold">"Connect Your Wallet"</h1>
                    <p class="text-gray-500 dark:text-gray-400">
                        "Connect your wallet to monitor your tokens on Base L2"
                    </p>
                </div>

                {move || match wallet.get() {
                    Some(address) => view! {
                        <div class="p-4 bg-green-50 dark:bg-green-900/20 rounded-lg">
                            <p class="text-green-700 dark:text-green-300 font-medium">"Wallet Connected"</p>
                            <p class="text-sm text-green-600 dark:text-green-400 mt-1">{address}</p>
                        </div>
                        <A
                            href="/dashboard"
                            class="inline-block px-4 py-2 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700"
                        >
                            "Go to Dashboard"
                        </A>
                    }.into_view(),
                    None => view! {
                        <button
                            class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-blue-400 \
                                   text-white rounded-lg font-medium"
                            on:click=connect_wallet.clone()
                            disabled=move || connecting.get()
                        >
                            {move || if connecting.get() {
                                view! { <InlineLoading />"Connecting..." }.into_view()
                            } else {
                                "Connect Wallet".into_view()
                            }}
                        </button>
                    }.into_view(),
                }}
            </div>
        </main>
    }
}
