//! API Client
//!
//! HTTP access to the Basewatch backend.

pub mod client;

pub use client::*;
