//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{DashboardLayout, Toast};
use crate::pages::{Analytics, Analyze, Auth, Insights, Landing, Overview, Settings, Tokens};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    view! {
        <Router>
            // Tailwind resolves `dark:` variants against this wrapper
            <div class=move || theme.get().root_class()>
                <div class="min-h-screen bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-white">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/auth" view=Auth />
                        <Route path="/analyze" view=Analyze />
                        <Route path="/dashboard" view=DashboardLayout>
                            <Route path="" view=Overview />
                            <Route path="tokens" view=Tokens />
                            <Route path="analytics" view=Analytics />
                            <Route path="insights" view=Insights />
                            <Route path="settings" view=Settings />
                        </Route>
                        <Route path="/*any" view=NotFound />
                    </Routes>

                    // Toast notifications
                    <Toast />
                </div>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
