//! Exam Tracker - exam administration in the browser
//!
//! Lists exams with their statistics and manages them, including file
//! attachments, against a remote REST backend. Built with Leptos and
//! WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
