use crate::i18n::Language;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Active language
    pub locale: Language,

    // JSON file of {key, locale, value} triples
    pub translations_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let locale = std::env::var("TRANSLATION_LOCALE").unwrap_or_else(|_| "en".to_string());

        Ok(Self {
            locale: Language::new(locale.as_str())
                .with_context(|| format!("TRANSLATION_LOCALE is invalid: '{}'", locale))?,

            translations_file: std::env::var("TRANSLATION_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty()),
        })
    }
}
