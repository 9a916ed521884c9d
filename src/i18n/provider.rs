//! Language providers: per-locale tables of translated templates.
//!
//! A [`LanguageProvider`] owns one [`LanguageTable`] per registered language.
//! Languages must be registered before values can be added for them; adding
//! to an unregistered language is an error rather than an implicit table
//! creation.

use crate::i18n::{Language, Result, TranslationError, TranslationRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Mapping from key to template for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTable {
    entries: HashMap<String, String>,
}

impl LanguageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the template stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite the template stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over all `(key, template)` pairs (unordered).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// One translated template for one language, used to populate a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedValue {
    pub key: String,
    #[serde(rename = "locale")]
    pub language: Language,
    pub value: String,
}

impl TranslatedValue {
    pub fn new(key: impl Into<String>, language: Language, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            language,
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, Language, V)> for TranslatedValue {
    fn from((key, language, value): (K, Language, V)) -> Self {
        Self::new(key, language, value)
    }
}

/// Registry of language tables, one per registered language.
#[derive(Debug, Clone, Default)]
pub struct LanguageProvider {
    tables: HashMap<Language, LanguageTable>,
}

impl LanguageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language with a fresh, empty table.
    ///
    /// Registering a language again discards its previous table: the last
    /// registration wins.
    pub fn register_language(&mut self, language: Language) -> &mut Self {
        debug!(language = %language, "Registering language in provider");
        self.tables.insert(language, LanguageTable::new());
        self
    }

    /// Insert or overwrite a template for a registered language.
    ///
    /// # Errors
    /// `LanguageNotFound` if `language` was never registered.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        language: &Language,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.tables
            .get_mut(language)
            .ok_or_else(|| TranslationError::LanguageNotFound(language.clone()))?
            .insert(key, value);
        Ok(self)
    }

    /// Insert a single [`TranslatedValue`].
    pub fn add_value(&mut self, value: TranslatedValue) -> Result<&mut Self> {
        let TranslatedValue {
            key,
            language,
            value,
        } = value;
        self.add(key, &language, value)
    }

    /// Insert every value of `values`, in iteration order.
    ///
    /// Stops at the first value whose language is not registered; values
    /// before it stay inserted.
    pub fn add_all<I>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<TranslatedValue>,
    {
        for value in values {
            self.add_value(value.into())?;
        }
        Ok(self)
    }

    /// The table of a registered language.
    ///
    /// # Errors
    /// `LanguageNotFound` if `language` was never registered.
    pub fn get(&self, language: &Language) -> Result<&LanguageTable> {
        self.tables
            .get(language)
            .ok_or_else(|| TranslationError::LanguageNotFound(language.clone()))
    }

    pub fn is_registered(&self, language: &Language) -> bool {
        self.tables.contains_key(language)
    }

    /// The registered languages (unordered).
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.tables.keys()
    }
}

/// A provider pre-registered for French and English.
///
/// Each key is added with both translations at once.
#[derive(Debug, Clone)]
pub struct FrenchEnglishProvider {
    provider: LanguageProvider,
}

impl FrenchEnglishProvider {
    pub fn new() -> Self {
        let mut provider = LanguageProvider::new();
        provider
            .register_language(Language::ENGLISH)
            .register_language(Language::FRENCH);
        Self { provider }
    }

    /// Add the French and English templates for `key`.
    ///
    /// # Errors
    /// `LanguageNotFound` if either language table is missing, which `new`
    /// rules out.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        french: impl Into<String>,
        english: impl Into<String>,
    ) -> Result<&mut Self> {
        let key = key.into();
        self.provider.add(key.clone(), &Language::FRENCH, french)?;
        self.provider.add(key, &Language::ENGLISH, english)?;
        Ok(self)
    }

    pub fn french(&self, key: &str) -> Option<&str> {
        self.provider
            .get(&Language::FRENCH)
            .ok()
            .and_then(|table| table.get(key))
    }

    pub fn english(&self, key: &str) -> Option<&str> {
        self.provider
            .get(&Language::ENGLISH)
            .ok()
            .and_then(|table| table.get(key))
    }

    /// Add both languages of this provider to `registry`.
    pub fn register_into(&self, registry: &mut TranslationRegistry) -> Result<()> {
        registry.add_language(Language::ENGLISH, &self.provider)?;
        registry.add_language(Language::FRENCH, &self.provider)?;
        Ok(())
    }

    pub fn provider(&self) -> &LanguageProvider {
        &self.provider
    }
}

impl Default for FrenchEnglishProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ErrorKind;

    // ==================== LanguageProvider Tests ====================

    #[test]
    fn test_add_and_get() {
        let mut provider = LanguageProvider::new();
        provider.register_language(Language::ENGLISH);
        provider
            .add("test", &Language::ENGLISH, "test-en")
            .expect("Should add");

        let table = provider.get(&Language::ENGLISH).expect("Should exist");
        assert_eq!(table.get("test"), Some("test-en"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_add_overwrites() {
        let mut provider = LanguageProvider::new();
        provider.register_language(Language::ENGLISH);
        provider.add("k", &Language::ENGLISH, "one").unwrap();
        provider.add("k", &Language::ENGLISH, "two").unwrap();

        assert_eq!(provider.get(&Language::ENGLISH).unwrap().get("k"), Some("two"));
    }

    #[test]
    fn test_add_unregistered_language_fails() {
        let mut provider = LanguageProvider::new();
        provider.register_language(Language::ENGLISH);

        let error = provider.add("k", &Language::FRENCH, "v").unwrap_err();
        assert_eq!(error, TranslationError::LanguageNotFound(Language::FRENCH));
        assert!(!provider.is_registered(&Language::FRENCH));
    }

    #[test]
    fn test_get_unregistered_language_fails() {
        let provider = LanguageProvider::new();
        let error = provider.get(&Language::ENGLISH).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_register_twice_discards_previous_entries() {
        let mut provider = LanguageProvider::new();
        provider.register_language(Language::ENGLISH);
        provider.add("old", &Language::ENGLISH, "v1").unwrap();

        provider.register_language(Language::ENGLISH);
        provider.add("new", &Language::ENGLISH, "v2").unwrap();

        let table = provider.get(&Language::ENGLISH).unwrap();
        assert!(!table.contains_key("old"));
        assert_eq!(table.get("new"), Some("v2"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_add_value() {
        let mut provider = LanguageProvider::new();
        provider.register_language(Language::FRENCH);
        provider
            .add_value(TranslatedValue::new("hello", Language::FRENCH, "bonjour"))
            .unwrap();

        assert_eq!(
            provider.get(&Language::FRENCH).unwrap().get("hello"),
            Some("bonjour")
        );
    }

    #[test]
    fn test_add_all_last_duplicate_wins() {
        let mut provider = LanguageProvider::new();
        provider
            .register_language(Language::ENGLISH)
            .register_language(Language::FRENCH);
        provider
            .add_all(vec![
                ("a", Language::ENGLISH, "first"),
                ("a", Language::FRENCH, "premier"),
                ("a", Language::ENGLISH, "second"),
            ])
            .unwrap();

        assert_eq!(provider.get(&Language::ENGLISH).unwrap().get("a"), Some("second"));
        assert_eq!(provider.get(&Language::FRENCH).unwrap().get("a"), Some("premier"));
    }

    #[test]
    fn test_add_all_stops_at_unregistered_language() {
        let mut provider = LanguageProvider::new();
        provider.register_language(Language::ENGLISH);

        let result = provider.add_all(vec![
            TranslatedValue::new("a", Language::ENGLISH, "x"),
            TranslatedValue::new("b", Language::FRENCH, "y"),
            TranslatedValue::new("c", Language::ENGLISH, "z"),
        ]);

        assert!(result.is_err());
        let table = provider.get(&Language::ENGLISH).unwrap();
        assert!(table.contains_key("a"));
        assert!(!table.contains_key("c"));
    }

    #[test]
    fn test_languages_lists_registered() {
        let mut provider = LanguageProvider::new();
        provider
            .register_language(Language::ENGLISH)
            .register_language(Language::FRENCH)
            .register_language(Language::ENGLISH);

        assert_eq!(provider.languages().count(), 2);
    }

    #[test]
    fn test_translated_value_deserialization() {
        let json = r#"{"key": "greet", "locale": "fr", "value": "Bonjour ${0}"}"#;
        let value: TranslatedValue = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(value, TranslatedValue::new("greet", Language::FRENCH, "Bonjour ${0}"));
    }

    #[test]
    fn test_translated_value_rejects_blank_locale() {
        let json = r#"{"key": "greet", "locale": " ", "value": "x"}"#;
        assert!(serde_json::from_str::<TranslatedValue>(json).is_err());
    }

    // ==================== LanguageTable Tests ====================

    #[test]
    fn test_table_iteration() {
        let mut table = LanguageTable::new();
        assert!(table.is_empty());
        table.insert("a", "1");
        table.insert("b", "2");

        let mut keys: Vec<&str> = table.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(table.iter().count(), 2);
    }

    // ==================== FrenchEnglishProvider Tests ====================

    #[test]
    fn test_french_english_add() {
        let mut provider = FrenchEnglishProvider::new();
        provider
            .add("yes", "oui", "yes")
            .expect("Should add")
            .add("no", "non", "no")
            .expect("Should add");

        assert_eq!(provider.french("yes"), Some("oui"));
        assert_eq!(provider.english("no"), Some("no"));
        assert_eq!(provider.french("maybe"), None);
    }

    #[test]
    fn test_french_english_add_fills_provider_tables() {
        let mut provider = FrenchEnglishProvider::new();
        provider.add("yes", "oui", "yes").expect("Should add");

        let inner = provider.provider();
        assert_eq!(inner.get(&Language::FRENCH).unwrap().get("yes"), Some("oui"));
        assert_eq!(inner.get(&Language::ENGLISH).unwrap().get("yes"), Some("yes"));
        assert_eq!(inner.get(&Language::FRENCH).unwrap().len(), 1);
    }

    #[test]
    fn test_french_english_registers_both_languages() {
        let provider = FrenchEnglishProvider::default();
        assert!(provider.provider().is_registered(&Language::ENGLISH));
        assert!(provider.provider().is_registered(&Language::FRENCH));
    }

    #[test]
    fn test_french_english_register_into() {
        let mut provider = FrenchEnglishProvider::new();
        provider.add("yes", "oui", "yes").expect("Should add");

        let mut registry = TranslationRegistry::new();
        provider.register_into(&mut registry).expect("Should register");
        registry.choose_language(&Language::FRENCH).unwrap();

        assert_eq!(registry.translate(&"yes".into()).unwrap(), "oui");
    }
}
