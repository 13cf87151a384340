//! Core client logic for exam tracking: backend API, models and page state

pub mod api;
pub mod config;
pub mod loader;
mod models;
pub mod page;
pub mod session;
pub mod stats;
#[cfg(test)]
mod tests;
pub mod validation;

pub use models::*;
