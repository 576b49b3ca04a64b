//! FlowForge Web
//!
//! Marketing and account-management single-page app for the FlowForge
//! workflow-automation platform, built with Leptos (WASM).
//!
//! # Features
//!
//! - Marketing pages (home, pricing, solutions)
//! - Email/password authentication against the FlowForge API
//! - Blog with nested comments
//! - PDF upload and viewer with OCR bounding-box overlay
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data operations are HTTP calls to the FlowForge REST API;
//! there is no backend code in this repository. PDF page rendering is
//! delegated to pdf.js, loaded as a global from `index.html`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod pdfjs;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
