//! Basewatch Dashboard
//!
//! Base L2 token monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard overview with trending tokens and alerts
//! - Token registry with address format checking
//! - Analytics and AI insight views
//! - Standalone token analyzer backed by the Basewatch API
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Basewatch API over HTTP. Everything other
//! than the analysis report is placeholder data generated in the browser.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
