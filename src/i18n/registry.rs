//! Language registry: single source of truth for the language labels shown
//! in the source and target selectors.
//!
//! The registry is a lazily initialized singleton (`OnceLock`) and is
//! immutable for the lifetime of the process.

use std::sync::OnceLock;

/// Display metadata for a dictionary language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "zh")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Chinese")
    pub name: &'static str,

    /// Bilingual selector label (e.g., "英语 (English)")
    pub label: &'static str,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language is known
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All known languages, in selector order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Resolve the selector label for a code, falling back to the raw code
    /// when the code is not in the table.
    pub fn label_for<'a>(&self, code: &'a str) -> &'a str {
        match self.get_by_code(code) {
            Some(lang) => lang.label,
            None => code,
        }
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            label: "英语 (English)",
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            label: "中文 (Chinese)",
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            label: "西班牙语 (Spanish)",
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            label: "法语 (French)",
        },
        LanguageConfig {
            code: "de",
            name: "German",
            label: "德语 (German)",
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            label: "俄语 (Russian)",
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            label: "日语 (Japanese)",
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            label: "阿拉伯语 (Arabic)",
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            label: "葡萄牙语 (Portuguese)",
        },
    ]
}
