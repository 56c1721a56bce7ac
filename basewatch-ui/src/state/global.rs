//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use super::toasts::{ToastLevel, ToastQueue, ToastTopic};

/// Label shown once the mock wallet connection completes
pub const MOCK_WALLET: &str = "0x1234...5678";

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Connected wallet label (mock)
    pub wallet: RwSignal<Option<String>>,
    /// Current colour theme
    pub theme: RwSignal<Theme>,
    /// Visible toast notifications
    pub toasts: RwSignal<ToastQueue>,
}

/// Colour theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to the root element; Tailwind runs in `darkMode: 'class'`
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    /// Icon for the toggle button (shows the theme it switches to)
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        wallet: create_rw_signal(None),
        theme: create_rw_signal(Theme::default()),
        toasts: create_rw_signal(ToastQueue::default()),
    };

    provide_context(state);
}

impl GlobalState {
    /// Wallet label for the dashboard header
    pub fn wallet_label(&self) -> String {
        self.wallet
            .get()
            .unwrap_or_else(|| "Not connected".to_string())
    }

    /// Mark the mock wallet as connected
    pub fn connect_wallet(&self) {
        self.wallet.set(Some(MOCK_WALLET.to_string()));
        self.show_success(ToastTopic::Wallet, "Wallet connected");
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }

    pub fn show_success(&self, topic: ToastTopic, message: &str) {
        self.notify(topic, ToastLevel::Success, message);
    }

    pub fn show_error(&self, topic: ToastTopic, message: &str) {
        self.notify(topic, ToastLevel::Error, message);
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|queue| {
            queue.dismiss(id);
        });
    }

    /// Queue a toast that clears itself after its level's duration
    fn notify(&self, topic: ToastTopic, level: ToastLevel, message: &str) {
        let mut id = 0;
        self.toasts.update(|queue| id = queue.push(topic, level, message));

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(level.duration_ms(), move || {
            toasts.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().root_class(), "dark");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Light.root_class(), "");
    }
}
