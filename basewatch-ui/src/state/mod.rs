//! State Management
//!
//! Global application state, toast notifications, the in-memory token
//! registry, and placeholder data generators.

pub mod global;
pub mod placeholders;
pub mod registry;
pub mod toasts;
