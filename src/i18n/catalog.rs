//! Language catalog: metadata for the languages the client knows by name.
//!
//! The catalog is informational only. A language tag that is not listed here
//! is still a perfectly valid locale for providers and the registry; it just
//! has no display name. The catalog is built once on first access through
//! `OnceLock` and is immutable afterwards.

use std::sync::OnceLock;

/// Metadata for a well-known language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Language tag (e.g., "en", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French")
    pub name: &'static str,

    /// Name of the language in its own translation (e.g., "Français")
    pub native_name: &'static str,
}

/// Global catalog of well-known languages.
pub struct LanguageCatalog {
    languages: Vec<LanguageInfo>,
}

static CATALOG: OnceLock<LanguageCatalog> = OnceLock::new();

impl LanguageCatalog {
    /// Get the global catalog instance, building it on first call.
    pub fn get() -> &'static LanguageCatalog {
        CATALOG.get_or_init(|| LanguageCatalog {
            languages: default_languages(),
        })
    }

    /// Look up a language by its tag.
    ///
    /// # Returns
    /// * `Some(&LanguageInfo)` if the tag is known
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageInfo> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All known languages, in catalog order.
    pub fn list_all(&self) -> Vec<&LanguageInfo> {
        self.languages.iter().collect()
    }

    /// Check if a tag is listed in the catalog.
    pub fn is_known(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn default_languages() -> Vec<LanguageInfo> {
    vec![
        LanguageInfo {
            code: "en",
            name: "English",
            native_name: "English",
        },
        LanguageInfo {
            code: "fr",
            name: "French",
            native_name: "Français",
        },
    ]
}
