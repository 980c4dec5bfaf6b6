//! Configuration store: the process-wide snapshot of the backend-declared
//! input limit and language pairs.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::{info, warn};

use crate::api::ApiClient;

/// Input limit used until the backend says otherwise.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 50;

fn default_max_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}

/// Widget configuration as served by `GET /api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Source code -> supported target codes, in display order
    #[serde(default)]
    pub available_pairs: BTreeMap<String, Vec<String>>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            available_pairs: BTreeMap::new(),
        }
    }
}

fn language_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]{2}$").expect("language code pattern is valid"))
}

/// Whether `code` is a two-letter lowercase language code.
pub fn is_language_code(code: &str) -> bool {
    language_code_pattern().is_match(code)
}

impl Configuration {
    /// Target codes declared for `source`; empty when there are none.
    pub fn targets_for(&self, source: &str) -> &[String] {
        self.available_pairs
            .get(source)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Source codes that have at least one target.
    pub fn sources(&self) -> Vec<&str> {
        self.available_pairs
            .iter()
            .filter(|(_, targets)| !targets.is_empty())
            .map(|(source, _)| source.as_str())
            .collect()
    }

    /// Drop malformed language codes and restore the default input limit
    /// when the backend sent a zero one.
    pub fn sanitized(mut self) -> Self {
        if self.max_input_chars == 0 {
            warn!(
                "Configuration has max_input_chars = 0, using {}",
                DEFAULT_MAX_INPUT_CHARS
            );
            self.max_input_chars = DEFAULT_MAX_INPUT_CHARS;
        }

        self.available_pairs.retain(|source, targets| {
            if !is_language_code(source) {
                warn!("Ignoring invalid source language code '{}'", source);
                return false;
            }
            targets.retain(|target| {
                let valid = is_language_code(target);
                if !valid {
                    warn!(
                        "Ignoring invalid target language code '{}' for '{}'",
                        target, source
                    );
                }
                valid
            });
            true
        });

        self
    }
}

/// Shared, replaceable configuration snapshot.
///
/// Cloning the store clones the handle; all clones see the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    current: Arc<RwLock<Arc<Configuration>>>,
}

impl ConfigStore {
    pub fn new(initial: Configuration) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    /// The configuration currently in effect.
    pub fn snapshot(&self) -> Arc<Configuration> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the whole configuration.
    pub fn replace(&self, configuration: Configuration) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(configuration);
    }

    /// Fetch the configuration from the backend and install it.
    ///
    /// Failures leave the current configuration in effect.
    ///
    /// # Returns
    /// `true` if a new configuration was installed.
    pub async fn load(&self, api: &ApiClient) -> bool {
        match api.fetch_config().await {
            Ok(configuration) => {
                let configuration = configuration.sanitized();
                info!(
                    "Loaded configuration from server: max_input_chars={}, sources={:?}",
                    configuration.max_input_chars,
                    configuration.sources()
                );
                self.replace(configuration);
                true
            }
            Err(e) => {
                warn!(
                    "Could not fetch config from server, keeping current values: {}",
                    e
                );
                false
            }
        }
    }
}
