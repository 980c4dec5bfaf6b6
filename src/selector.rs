//! Language selectors and the target-language updater.

use crate::i18n::{LanguageRegistry, LanguageStrings};
use crate::store::Configuration;

/// One entry of a selector. Entries without a value are placeholders and
/// cannot be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: Option<String>,
    pub label: String,
}

impl SelectOption {
    pub fn language(code: &str) -> Self {
        Self {
            value: Some(code.to_string()),
            label: LanguageRegistry::get().label_for(code).to_string(),
        }
    }

    pub fn placeholder(label: &str) -> Self {
        Self {
            value: None,
            label: label.to_string(),
        }
    }
}

/// A drop-down list of languages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub options: Vec<SelectOption>,
    pub selected: Option<String>,
    pub disabled: bool,
}

impl Selector {
    /// Source selector listing every language of the label table.
    pub fn source_languages(selected: &str) -> Self {
        let options: Vec<SelectOption> = LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(|lang| SelectOption::language(lang.code))
            .collect();

        let mut selector = Self {
            options,
            selected: None,
            disabled: false,
        };
        selector.select(selected);
        selector
    }

    /// Select the entry with value `code`.
    ///
    /// # Returns
    /// `false` (and no change) if the selector is disabled or has no such entry.
    pub fn select(&mut self, code: &str) -> bool {
        if self.disabled || !self.has_value(code) {
            return false;
        }
        self.selected = Some(code.to_string());
        true
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn has_value(&self, code: &str) -> bool {
        self.options
            .iter()
            .any(|option| option.value.as_deref() == Some(code))
    }

    /// Values of all selectable entries, in order.
    pub fn values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter_map(|option| option.value.as_deref())
            .collect()
    }
}

/// Rebuild the target selector for the selected source language.
///
/// Without targets for `source` the selector gets a single placeholder and is
/// disabled. Otherwise it lists the configured targets in order, enabled,
/// with the first one selected. The option list is replaced on every call.
pub fn update_targets(
    target: &mut Selector,
    configuration: &Configuration,
    source: Option<&str>,
    strings: &LanguageStrings,
) {
    let targets = source
        .map(|code| configuration.targets_for(code))
        .unwrap_or_default();

    target.options.clear();

    if targets.is_empty() {
        target
            .options
            .push(SelectOption::placeholder(strings.no_targets));
        target.selected = None;
        target.disabled = true;
        return;
    }

    target
        .options
        .extend(targets.iter().map(|code| SelectOption::language(code)));
    target.selected = targets.first().cloned();
    target.disabled = false;
}
