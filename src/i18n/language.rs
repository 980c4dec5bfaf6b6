//! Language type: a language code validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated dictionary language.
///
/// Only codes present in the [`LanguageRegistry`] can be turned into a
/// `Language`; arbitrary codes coming from the backend stay plain strings
/// and are labelled through [`LanguageRegistry::label_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a language from its ISO 639-1 code.
    ///
    /// # Errors
    /// Returns an error if the code is not registered.
    pub fn from_code(code: &str) -> Result<Self> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Language preselected in the source selector.
    pub fn default_source() -> Self {
        Self::ENGLISH
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Bilingual selector label (e.g., "英语 (English)").
    pub fn label(&self) -> &'static str {
        self.config().label
    }
}
