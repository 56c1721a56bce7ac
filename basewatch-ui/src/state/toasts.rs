//! Toast notification queue
//!
//! Plain data behind the toast stack; `GlobalState` owns one queue and
//! expires entries on a timer.

/// At most this many toasts are visible; the oldest is dropped first
pub const MAX_TOASTS: usize = 3;

/// Part of the app a toast reports on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastTopic {
    Wallet,
    Registry,
    Analysis,
    Api,
}

impl ToastTopic {
    pub fn label(self) -> &'static str {
        match self {
            ToastTopic::Wallet => "Wallet",
            ToastTopic::Registry => "Token Registry",
            ToastTopic::Analysis => "AI Analysis",
            ToastTopic::Api => "API",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn icon(self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✕",
        }
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "bg-green-600",
            ToastLevel::Error => "bg-red-600",
        }
    }

    /// How long the toast stays up; errors linger
    pub fn duration_ms(self) -> u32 {
        match self {
            ToastLevel::Success => 3000,
            ToastLevel::Error => 5000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub topic: ToastTopic,
    pub level: ToastLevel,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<ToastMessage>,
}

impl ToastQueue {
    /// Visible toasts, oldest first
    pub fn items(&self) -> &[ToastMessage] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Queue a toast and return its id
    pub fn push(&mut self, topic: ToastTopic, level: ToastLevel, text: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;

        self.items.push(ToastMessage {
            id,
            topic,
            level,
            text: text.to_string(),
        });
        if self.items.len() > MAX_TOASTS {
            self.items.remove(0);
        }

        id
    }

    /// Remove a toast; `false` if it already expired or was dismissed
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();

        let first = queue.push(ToastTopic::Registry, ToastLevel::Success, "Token added");
        let second = queue.push(ToastTopic::Analysis, ToastLevel::Error, "Failed to analyze token");

        assert!(second > first);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[0].topic, ToastTopic::Registry);
        assert_eq!(queue.items()[1].text, "Failed to analyze token");
    }

    #[test]
    fn test_oldest_toast_dropped_when_full() {
        let mut queue = ToastQueue::default();

        let oldest = queue.push(ToastTopic::Wallet, ToastLevel::Success, "Wallet connected");
        for n in 0..MAX_TOASTS {
            queue.push(ToastTopic::Api, ToastLevel::Error, &format!("failure {}", n));
        }

        assert_eq!(queue.items().len(), MAX_TOASTS);
        assert!(queue.items().iter().all(|toast| toast.id != oldest));
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastTopic::Registry, ToastLevel::Success, "Token added");

        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
        // Expiry after a manual dismiss is a no-op
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn test_errors_linger_longer() {
        assert!(ToastLevel::Error.duration_ms() > ToastLevel::Success.duration_ms());
        assert_eq!(ToastTopic::Analysis.label(), "AI Analysis");
    }
}
