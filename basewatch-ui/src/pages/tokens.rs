//! Token Registry Page
//!
//! Add and remove tokens in the in-memory registry. Candidate addresses go
//! through a format check behind a simulated round trip before they can be
//! added.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::{InlineLoading, Panel};
use crate::state::global::GlobalState;
use crate::state::registry::{TokenRegistry, ValidationStatus, VALIDATION_DELAY_MS};
use crate::state::toasts::ToastTopic;

#[component]
pub fn Tokens() -> impl IntoView {
    let registry = create_rw_signal(TokenRegistry::seeded());
    let (dialog_open, set_dialog_open) = create_signal(false);

    view! {
        <div class="flex flex-col gap-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold tracking-tight">"Token Registry"</h1>
                    <p class="text-gray-500 dark:text-gray-400">
                        "Add and manage tokens to monitor on Base L2"
                    </p>
                </div>
                <button
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium"
                    on:click=move |_| set_dialog_open.set(true)
                >
                    "+ Add Token"
                </button>
            </div>

            <Show when=move || dialog_open.get()>
                <AddTokenDialog registry=registry on_close=move || set_dialog_open.set(false) />
            </Show>

            <Panel title="Your Registered Tokens" description="Tokens you're currently monitoring on Base L2">
                <TokenTable registry=registry />
            </Panel>
        </div>
    }
}

#[component]
fn TokenTable(registry: RwSignal<TokenRegistry>) -> impl IntoView {
    let remove = move |id: u32| {
        registry.update(|r| {
            r.remove(id);
        });
    };

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-500 border-b border-gray-200 dark:border-gray-700">
                        <th class="py-2">"Name"</th>
                        <th>"Symbol"</th>
                        <th>"Address"</th>
                        <th>"Market Cap"</th>
                        <th>"Price"</th>
                        <th>"24h Change"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || registry.get().tokens().to_vec()
                        key=|token| token.id
                        children=move |token| {
                            let id = token.id;
                            let change_class = if token.is_gain() { "text-green-600" } else { "text-red-600" };
                            view! {
                                <tr class="border-b border-gray-100 dark:border-gray-700/50">
                                    <td class="py-2 font-medium">{token.name.clone()}</td>
                                    <td>{token.symbol.clone()}</td>
                                    <td class="font-mono text-xs" title=token.address.clone()>{token.short_address()}</td>
                                    <td>{token.market_cap.clone()}</td>
                                    <td>{token.price.clone()}</td>
                                    <td class=change_class>{token.change_24h.clone()}</td>
                                    <td>
                                        <button
                                            class="px-2 py-1 rounded hover:bg-gray-100 dark:hover:bg-gray-700"
                                            title="Remove"
                                            on:click=move |_| remove(id)
                                        >
                                            "🗑"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || registry.with(|r| r.is_empty())>
                <p class="text-sm text-gray-500 text-center py-8">"No tokens registered."</p>
            </Show>
        </div>
    }
}

#[component]
fn AddTokenDialog<F>(registry: RwSignal<TokenRegistry>, on_close: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (address, set_address) = create_signal(String::new());
    let status = create_rw_signal(ValidationStatus::default());
    // In-flight format check; dropping the handle cancels it
    let pending = store_value(None::<Timeout>);

    on_cleanup(move || {
        pending.try_update_value(|timeout| timeout.take());
    });

    let on_input = move |event: ev::Event| {
        pending.set_value(None);
        set_address.set(event_target_value(&event));
        status.set(ValidationStatus::Unchecked);
    };

    let check = move |_| {
        let candidate = address.get();
        if candidate.is_empty() {
            return;
        }

        status.set(ValidationStatus::Checking);
        let timeout = Timeout::new(VALIDATION_DELAY_MS, move || {
            finish_check(status, &candidate);
        });
        pending.set_value(Some(timeout));
    };

    let add = move |_| {
        if !status.get().can_submit() {
            return;
        }

        let mut added = None;
        registry.update(|r| added = r.add(&address.get_untracked()));

        if added.is_some() {
            state.show_success(ToastTopic::Registry, "Token added");
            on_close();
        }
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
            <div class="w-full max-w-md bg-white dark:bg-gray-800 rounded-xl p-6 space-y-4">
                <div>
                    <h2 class="text-lg font-semibold">"Add a new token"</h2>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Enter the contract address of the token you want to monitor."
                    </p>
                </div>

                <div class="space-y-2">
                    <label for="token-address" class="text-sm font-medium">"Token Address"</label>
                    <div class="flex gap-2">
                        <input
                            id="token-address"
                            type="text"
                            placeholder="0x..."
                            prop:value=move || address.get()
                            on:input=on_input
                            class="flex-1 bg-gray-50 dark:bg-gray-700 rounded-lg px-3 py-2 font-mono text-sm \
                                   border border-gray-300 dark:border-gray-600 focus:border-blue-500 focus:outline-none"
                        />
                        <button
                            on:click=check
                            disabled=move || status.get() == ValidationStatus::Checking || address.with(|a| a.is_empty())
                            class="px-3 py-2 rounded-lg border border-gray-300 dark:border-gray-600 disabled:opacity-50"
                        >
                            {move || if status.get() == ValidationStatus::Checking {
                                view! { <InlineLoading />"Checking..." }.into_view()
                            } else {
                                "Check".into_view()
                            }}
                        </button>
                    </div>

                    {move || match status.get() {
                        ValidationStatus::Valid => view! {
                            <p class="text-sm font-medium text-green-600">"✓ Valid token address"</p>
                        }.into_view(),
                        ValidationStatus::Invalid => view! {
                            <p class="text-sm font-medium text-red-600">"✕ Invalid token address"</p>
                        }.into_view(),
                        _ => view! {}.into_view(),
                    }}
                </div>

                <div class="flex justify-end gap-2">
                    <button
                        class="px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600"
                        on:click=move |_| on_close()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-blue-400 text-white rounded-lg font-medium"
                        on:click=add
                        disabled=move || !status.get().can_submit()
                    >
                        "Add Token"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Publish the result of a format check. Returns `false` when the dialog
/// was closed before the check finished.
fn finish_check(status: RwSignal<ValidationStatus>, candidate: &str) -> bool {
    status
        .try_set(ValidationStatus::from_address(candidate))
        .is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "0x4200000000000000000000000000000000000006";

    #[test]
    fn test_finish_check_sets_status() {
        let runtime = create_runtime();
        let status = create_rw_signal(ValidationStatus::Checking);

        assert!(finish_check(status, VALID));
        assert_eq!(status.get_untracked(), ValidationStatus::Valid);

        assert!(finish_check(status, "0x123"));
        assert_eq!(status.get_untracked(), ValidationStatus::Invalid);

        runtime.dispose();
    }

    #[test]
    fn test_finish_check_after_dialog_closed() {
        let runtime = create_runtime();
        let status = create_rw_signal(ValidationStatus::Checking);
        status.dispose();

        assert!(!finish_check(status, VALID));
        assert_eq!(status.try_get_untracked(), None);

        runtime.dispose();
    }
}
