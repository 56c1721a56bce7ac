//! Pages
//!
//! Top-level page components for each route.

pub mod analytics;
pub mod analyze;
pub mod auth;
pub mod insights;
pub mod landing;
pub mod overview;
pub mod settings;
pub mod tokens;

pub use analytics::Analytics;
pub use analyze::Analyze;
pub use auth::Auth;
pub use insights::Insights;
pub use landing::Landing;
pub use overview::Overview;
pub use settings::Settings;
pub use tokens::Tokens;
