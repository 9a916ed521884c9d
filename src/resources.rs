//! Loading translated values from resource files.
//!
//! Resource files are JSON arrays of `{"key", "locale", "value"}` objects.
//! Parsing happens here, outside the `i18n` core, which only ever receives
//! already-decoded [`TranslatedValue`]s.

use crate::i18n::{Language, LanguageProvider, TranslatedValue};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Read every translated value of a JSON resource file.
pub fn load_translated_values(path: impl AsRef<Path>) -> Result<Vec<TranslatedValue>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file {}", path.display()))?;
    let values: Vec<TranslatedValue> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse translation file {}", path.display()))?;

    info!(
        "Loaded {} translated values from {}",
        values.len(),
        path.display()
    );
    Ok(values)
}

/// Build a provider holding `values`, registering each language on first sight.
///
/// Returns the provider and its languages in first-seen order.
pub fn build_provider(values: Vec<TranslatedValue>) -> Result<(LanguageProvider, Vec<Language>)> {
    let mut provider = LanguageProvider::new();
    let mut languages: Vec<Language> = Vec::new();

    for value in &values {
        if !languages.contains(&value.language) {
            provider.register_language(value.language.clone());
            languages.push(value.language.clone());
        }
    }

    provider
        .add_all(values)
        .context("Failed to populate language provider")?;

    Ok((provider, languages))
}
