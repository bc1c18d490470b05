//! Leptos コンポーネント

pub mod catalog;
pub mod fabric_options;
