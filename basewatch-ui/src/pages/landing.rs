//! Landing Page

use leptos::*;
use leptos_router::*;

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <main class="container mx-auto px-4 py-24 flex flex-col items-center justify-center min-h-screen">
            <h1 class="text-4xl font-bold mb-6">"Base L2 Token Monitor"</h1>
            <p class="text-xl mb-8 max-w-2xl text-center">
                "Advanced monitoring and analytics for tokens on the Base L2 blockchain"
            </p>

            <div class="flex gap-4 mt-4">
                <A
                    href="/dashboard"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700 transition-colors"
                >
                    "Launch Dashboard"
                </A>
                <A
                    href="/auth"
                    class="px-6 py-3 bg-gray-200 text-gray-800 rounded-lg font-medium hover:bg-gray-300 transition-colors"
                >
                    "Connect Wallet"
                </A>
            </div>
        </main>
    }
}
