//! Translation registry: the active language and the tables it resolves keys in.
//!
//! A registry moves through three states:
//!
//! - `Unconfigured`: no language added yet
//! - `Configured`: at least one language added, none chosen
//! - `Ready`: an active language has been chosen and is guaranteed present
//!
//! The registry is a plain value meant to be owned by the application and
//! passed to call sites. When a single process-wide instance is needed,
//! [`TranslationRegistry::global`] hands out one behind a `Mutex`.

use crate::i18n::{
    template, Arg, Language, LanguageProvider, LanguageTable, MultiKey, Result,
    TranslationError, TranslationKey, TranslationMetrics,
};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};
use tracing::{debug, warn};

/// Lifecycle state of a [`TranslationRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Unconfigured,
    Configured,
    Ready,
}

/// Something whose displayed text depends on the active language.
///
/// Implementors re-render their text from the registry, typically after
/// the active language changed.
pub trait Translatable {
    fn translate(&mut self, registry: &TranslationRegistry) -> Result<()>;
}

/// Associates languages with their tables and resolves keys in the active one.
#[derive(Debug, Default)]
pub struct TranslationRegistry {
    languages: HashMap<Language, LanguageTable>,
    active: Option<Language>,
    metrics: TranslationMetrics,
}

static GLOBAL: OnceLock<Mutex<TranslationRegistry>> = OnceLock::new();

impl TranslationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide registry, creating it empty on first call.
    ///
    /// Callers serialize access through the returned mutex.
    pub fn global() -> &'static Mutex<TranslationRegistry> {
        GLOBAL.get_or_init(|| Mutex::new(TranslationRegistry::new()))
    }

    /// Associate `language` with a snapshot of the provider's table for it.
    ///
    /// Adding the same language again replaces the previous table. Values
    /// added to the provider afterwards are not seen until the language is
    /// added again.
    ///
    /// # Errors
    /// `LanguageNotFound` if the provider has no table for `language`.
    pub fn add_language(
        &mut self,
        language: Language,
        provider: &LanguageProvider,
    ) -> Result<&mut Self> {
        let table = provider.get(&language)?.clone();
        debug!(
            language = %language,
            entries = table.len(),
            "Adding language to translation registry"
        );
        self.languages.insert(language, table);
        Ok(self)
    }

    /// Make `language` the active language.
    ///
    /// # Errors
    /// `LanguageNotFound` if `language` was never added.
    pub fn choose_language(&mut self, language: &Language) -> Result<&mut Self> {
        if !self.languages.contains_key(language) {
            return Err(TranslationError::LanguageNotFound(language.clone()));
        }
        debug!(language = %language, "Active language chosen");
        self.active = Some(language.clone());
        Ok(self)
    }

    pub fn active_language(&self) -> Option<&Language> {
        self.active.as_ref()
    }

    pub fn state(&self) -> RegistryState {
        match (&self.active, self.languages.is_empty()) {
            (Some(_), _) => RegistryState::Ready,
            (None, true) => RegistryState::Unconfigured,
            (None, false) => RegistryState::Configured,
        }
    }

    /// The languages added so far (unordered).
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.languages.keys()
    }

    /// The table associated with `language`, if it was added.
    pub fn table(&self, language: &Language) -> Option<&LanguageTable> {
        self.languages.get(language)
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    /// Translate `key` in the active language, filling its own arguments.
    ///
    /// The empty key translates to `""` whatever the registry state.
    ///
    /// # Errors
    /// - `NoActiveLanguage` if no language was chosen
    /// - `TranslationNotFound` if the active table has no such key
    pub fn translate(&self, key: &TranslationKey) -> Result<String> {
        let raw = self.template(key.key())?;
        Ok(template::fill(raw, key.args()).into_owned())
    }

    /// Translate `key` with `args` instead of the arguments it carries.
    pub fn translate_with<I>(&self, key: &TranslationKey, args: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
        let raw = self.template(key.key())?;
        Ok(template::fill(raw, &args).into_owned())
    }

    /// Translate every key of `keys` and concatenate the results in order.
    ///
    /// Fails on the first key that cannot be translated.
    pub fn translate_multi(&self, keys: &MultiKey) -> Result<String> {
        keys.iter().try_fold(String::new(), |mut out, key| -> Result<String> {
            out.push_str(&self.translate(key)?);
            Ok(out)
        })
    }

    /// Translate `key`, falling back to the raw key string on any error.
    pub fn translate_or_key(&self, key: &TranslationKey) -> String {
        match self.translate(key) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    language = ?self.active.as_ref().map(Language::code),
                    key = %key,
                    "Missing translation: {}",
                    e
                );
                key.key().to_string()
            }
        }
    }

    /// Re-translate every element against this registry.
    ///
    /// Stops at the first element that fails.
    pub fn translate_all(&self, elements: &mut [&mut dyn Translatable]) -> Result<()> {
        for element in elements.iter_mut() {
            element.translate(self)?;
        }
        Ok(())
    }

    fn template(&self, key: &str) -> Result<&str> {
        if key.is_empty() {
            self.metrics.record_empty_key();
            return Ok("");
        }

        let active = self
            .active
            .as_ref()
            .ok_or(TranslationError::NoActiveLanguage)?;
        let table = self
            .languages
            .get(active)
            .ok_or_else(|| TranslationError::LanguageNotFound(active.clone()))?;

        match table.get(key) {
            Some(template) => {
                self.metrics.record_hit();
                Ok(template)
            }
            None => {
                self.metrics.record_miss();
                Err(TranslationError::TranslationNotFound {
                    key: key.to_string(),
                })
            }
        }
    }
}
