use anyhow::{bail, Context, Result};
use std::time::Duration;

use crate::i18n::LanguageStrings;

/// Runtime settings for the widget client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the dictionary backend (serves /api/config and /api/lookup)
    pub api_url: String,

    /// Code of the language used for user-facing strings ("zh" or "en")
    pub ui_language: String,

    /// Per-request timeout. None waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            ui_language: "zh".to_string(),
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_url = std::env::var("DICT_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let ui_language = std::env::var("DICT_UI_LANG").unwrap_or(defaults.ui_language);
        if LanguageStrings::for_code(&ui_language).is_none() {
            bail!(
                "Unsupported DICT_UI_LANG '{}'. Available options: {}",
                ui_language,
                LanguageStrings::supported_codes().join(", ")
            );
        }

        let request_timeout = match std::env::var("DICT_REQUEST_TIMEOUT_SECS") {
            Ok(v) => {
                let secs: u64 = v
                    .parse()
                    .with_context(|| format!("DICT_REQUEST_TIMEOUT_SECS is not a number: {}", v))?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            api_url,
            ui_language,
            request_timeout,
        })
    }

    /// Localized strings for the configured UI language.
    pub fn strings(&self) -> &'static LanguageStrings {
        LanguageStrings::for_code(&self.ui_language).unwrap_or(&crate::i18n::CHINESE_STRINGS)
    }
}
