//! Dictionary lookup widget.
//!
//! Loads the language-pair configuration from the dictionary backend, keeps
//! the source/target selectors in sync with it, looks words up and renders
//! the returned definitions as escaped HTML or plain text.

pub mod api;
pub mod config;
pub mod i18n;
pub mod render;
pub mod selector;
pub mod store;
pub mod widget;
