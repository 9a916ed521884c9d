//! Language type: the locale identifier used to select a translation table.

use crate::i18n::{LanguageCatalog, LanguageInfo, Result, TranslationError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A validated language tag.
///
/// Two languages are equal when their tags are equal. Tags are kept as given
/// (no case folding), so `"en"` and `"EN"` are different locales.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language {
    code: Cow<'static, str>,
}

impl Language {
    /// English.
    pub const ENGLISH: Language = Language {
        code: Cow::Borrowed("en"),
    };

    /// French.
    pub const FRENCH: Language = Language {
        code: Cow::Borrowed("fr"),
    };

    /// Create a language from its tag.
    ///
    /// # Errors
    /// `InvalidArgument` if the tag is empty or only whitespace.
    ///
    /// # Example
    /// ```
    /// use client_translation::i18n::Language;
    ///
    /// let brazilian = Language::new("pt-BR").unwrap();
    /// assert_eq!(brazilian.code(), "pt-BR");
    /// ```
    pub fn new(code: impl Into<String>) -> Result<Language> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(TranslationError::invalid_argument(
                "language code must not be empty",
            ));
        }
        Ok(Language {
            code: Cow::Owned(code),
        })
    }

    /// The language tag.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Catalog metadata, when this is a well-known language.
    pub fn info(&self) -> Option<&'static LanguageInfo> {
        LanguageCatalog::get().get_by_code(self.code())
    }

    /// Name of the language in its own translation (e.g., "Français").
    pub fn native_name(&self) -> Option<&'static str> {
        self.info().map(|info| info.native_name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Language {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self> {
        Language::new(s)
    }
}

impl TryFrom<String> for Language {
    type Error = TranslationError;

    fn try_from(code: String) -> Result<Self> {
        Language::new(code)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code.into_owned()
    }
}
