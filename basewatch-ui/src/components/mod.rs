//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod analysis_tabs;
pub mod layout;
pub mod loading;
pub mod panel;
pub mod stat_card;
pub mod tabs;
pub mod toast;

pub use analysis_tabs::{AnalysisTabs, ChartPlaceholder};
pub use layout::DashboardLayout;
pub use loading::{InlineLoading, Loading};
pub use panel::Panel;
pub use stat_card::StatCard;
pub use tabs::TabBar;
pub use toast::Toast;
