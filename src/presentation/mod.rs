//! Leptos views. Components render domain state; pages own it.

pub mod components;
pub mod pages;
pub mod styles;
