pub mod auth;
pub mod common;
pub mod exam;
pub mod icon;
pub mod pages;

pub use icon::{Icon, icons};
