//! Internationalization for the widget.
//!
//! - `registry`: the static language label table used by the selectors
//! - `language`: validated `Language` type on top of the registry
//! - `strings`: localized user-facing strings (Chinese and English)
//!
//! # Example
//!
//! ```rust,ignore
//! use ai_dictionary::i18n::{LanguageRegistry, LanguageStrings};
//!
//! let label = LanguageRegistry::get().label_for("ja"); // "日语 (Japanese)"
//! let strings = LanguageStrings::for_code("en").unwrap();
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, CHINESE_STRINGS, ENGLISH_STRINGS};
