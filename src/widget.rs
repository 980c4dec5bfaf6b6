//! The lookup widget: page state, event dispatch and the lookup controller.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use crate::api::{ApiClient, ApiError, LookupRequest};
use crate::i18n::{Language, LanguageStrings};
use crate::render::{self, ResultsPanel};
use crate::selector::{update_targets, Selector};
use crate::store::{ConfigStore, Configuration};

/// Everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub word_input: String,
    pub source: Selector,
    pub target: Selector,
    /// Mirrors the target selector: disabled while no language pair is available
    pub search_enabled: bool,
    pub results: ResultsPanel,
}

/// User interactions the widget reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    WordInput(String),
    SourceChanged(String),
    TargetChanged(String),
    SearchClicked,
    /// Key pressed while the word field has focus (e.g., "Enter")
    KeyDown(String),
}

/// What a call to [`Widget::search`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Form not ready (empty word, no language pair); nothing happened
    NotReady,
    /// Word longer than the configured limit; no request was sent
    InputTooLong { max: usize },
    /// Results were rendered
    Rendered,
    /// The lookup failed and the error is displayed
    Failed,
    /// A newer search was started while this one was in flight; its result
    /// was dropped
    Superseded,
}

struct PageState {
    page: Page,
    /// Tag of the most recently issued lookup
    latest_search: u64,
}

struct Inner {
    api: ApiClient,
    store: ConfigStore,
    strings: &'static LanguageStrings,
    state: Mutex<PageState>,
}

/// Handle to the widget. Clones share the same page.
#[derive(Clone)]
pub struct Widget {
    inner: Arc<Inner>,
}

impl Widget {
    /// Widget with default configuration, English preselected as source.
    pub fn new(api: ApiClient, strings: &'static LanguageStrings) -> Self {
        Self::with_store(api, ConfigStore::default(), strings)
    }

    /// Widget reading its configuration from `store`.
    pub fn with_store(api: ApiClient, store: ConfigStore, strings: &'static LanguageStrings) -> Self {
        let mut page = Page {
            word_input: String::new(),
            source: Selector::source_languages(Language::default_source().code()),
            target: Selector::default(),
            search_enabled: false,
            results: ResultsPanel::Empty,
        };
        refresh_targets(&mut page, &store.snapshot(), strings);

        Self {
            inner: Arc::new(Inner {
                api,
                store,
                strings,
                state: Mutex::new(PageState {
                    page,
                    latest_search: 0,
                }),
            }),
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.inner.store
    }

    pub fn strings(&self) -> &'static LanguageStrings {
        self.inner.strings
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current page.
    pub fn page(&self) -> Page {
        self.state().page.clone()
    }

    /// Fetch the backend configuration, then rebuild the target selector.
    ///
    /// The selector is rebuilt even when the fetch fails so the page shows
    /// the state implied by the configuration still in effect.
    pub async fn init(&self) -> bool {
        let loaded = self.inner.store.load(&self.inner.api).await;
        self.update_targets();
        loaded
    }

    /// Rebuild the target selector from the current source selection.
    pub fn update_targets(&self) {
        let configuration = self.inner.store.snapshot();
        let mut state = self.state();
        refresh_targets(&mut state.page, &configuration, self.inner.strings);
    }

    pub fn set_word(&self, word: &str) {
        self.state().page.word_input = word.to_string();
    }

    /// Change the source language and rebuild the targets.
    ///
    /// # Returns
    /// `false` if `code` is not one of the source options.
    pub fn select_source(&self, code: &str) -> bool {
        let configuration = self.inner.store.snapshot();
        let mut state = self.state();
        if !state.page.source.select(code) {
            return false;
        }
        refresh_targets(&mut state.page, &configuration, self.inner.strings);
        true
    }

    /// Change the target language.
    ///
    /// # Returns
    /// `false` if the selector is disabled or has no such option.
    pub fn select_target(&self, code: &str) -> bool {
        self.state().page.target.select(code)
    }

    /// Apply a user interaction.
    pub async fn handle_event(&self, event: UiEvent) -> Option<SearchOutcome> {
        match event {
            UiEvent::WordInput(word) => {
                self.set_word(&word);
                None
            }
            UiEvent::SourceChanged(code) => {
                match Language::from_code(&code) {
                    Ok(language) => {
                        self.select_source(language.code());
                    }
                    Err(e) => debug!("Ignoring source change: {}", e),
                }
                None
            }
            UiEvent::TargetChanged(code) => {
                if !self.select_target(&code) {
                    debug!("Ignoring unavailable target language '{}'", code);
                }
                None
            }
            UiEvent::SearchClicked => Some(self.search().await),
            UiEvent::KeyDown(key) if key == "Enter" => Some(self.search().await),
            UiEvent::KeyDown(_) => None,
        }
    }

    /// Look up the entered word and display the outcome.
    ///
    /// Only the most recently started search may write the results panel;
    /// a slower earlier response is discarded when it arrives.
    pub async fn search(&self) -> SearchOutcome {
        let (tag, request) = match self.begin_search() {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };

        info!(
            "Searching '{}' ({} -> {})",
            request.word, request.source, request.target
        );
        let result = self.inner.api.lookup(&request).await;

        let mut state = self.state();
        if state.latest_search != tag {
            debug!(
                "Discarding result for '{}' (search #{} superseded by #{})",
                request.word, tag, state.latest_search
            );
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(response) => {
                state.page.results = ResultsPanel::Lookup(render::render(
                    &request.word,
                    &response,
                    self.inner.strings,
                ));
                SearchOutcome::Rendered
            }
            Err(e) => {
                warn!("Lookup for '{}' failed: {}", request.word, e);
                let message = self
                    .inner
                    .strings
                    .format_lookup_failed(&describe_error(&e, self.inner.strings));
                state.page.results = ResultsPanel::Error(message);
                SearchOutcome::Failed
            }
        }
    }

    /// Check preconditions, validate and show the searching placeholder.
    fn begin_search(&self) -> Result<(u64, LookupRequest), SearchOutcome> {
        let max_input_chars = self.inner.store.snapshot().max_input_chars;
        let mut state = self.state();

        let request = {
            let page = &state.page;
            let word = page.word_input.trim();
            match (page.source.selected(), page.target.selected()) {
                (Some(source), Some(target)) if !word.is_empty() && !page.target.disabled => {
                    LookupRequest {
                        word: word.to_string(),
                        source: source.to_string(),
                        target: target.to_string(),
                    }
                }
                _ => return Err(SearchOutcome::NotReady),
            }
        };

        // A rejected search still supersedes any lookup in flight
        state.latest_search += 1;

        if let Err(max) = check_length(&request.word, max_input_chars) {
            state.page.results = ResultsPanel::Error(self.inner.strings.format_input_too_long(max));
            return Err(SearchOutcome::InputTooLong { max });
        }

        state.page.results = ResultsPanel::Searching(self.inner.strings.searching.to_string());
        Ok((state.latest_search, request))
    }
}

fn refresh_targets(page: &mut Page, configuration: &Configuration, strings: &LanguageStrings) {
    update_targets(
        &mut page.target,
        configuration,
        page.source.selected(),
        strings,
    );
    page.search_enabled = !page.target.disabled;
}

/// Reject words longer than `max` characters.
///
/// # Returns
/// `Err(max)` when the word is too long.
pub fn check_length(word: &str, max: usize) -> Result<(), usize> {
    if word.chars().count() > max {
        Err(max)
    } else {
        Ok(())
    }
}

/// Localized description of a lookup failure.
fn describe_error(error: &ApiError, strings: &LanguageStrings) -> String {
    match error {
        ApiError::Status { status, body } => strings.format_server_error(*status, body),
        other => other.to_string(),
    }
}
