//! Internationalization (i18n) module: key-based message lookup.
//!
//! Call sites describe the message they want with a [`TranslationKey`] (or a
//! [`MultiKey`] for several messages at once) and ask a
//! [`TranslationRegistry`] to translate it in the active language.
//!
//! # Architecture
//!
//! - `language`: validated language tag used as the locale identifier
//! - `catalog`: display metadata for well-known languages
//! - `key`: translation keys, positional arguments and multi keys
//! - `provider`: per-language tables and the providers that fill them
//! - `registry`: active language selection, lookup and substitution
//! - `template`: `${N}` placeholder substitution
//! - `validator`: cross-language consistency checks
//! - `metrics`: lookup counters
//!
//! # Example
//!
//! ```
//! use client_translation::i18n::{Language, LanguageProvider, TranslationKey, TranslationRegistry};
//!
//! let mut provider = LanguageProvider::new();
//! provider.register_language(Language::ENGLISH);
//! provider.add("greet", &Language::ENGLISH, "Hello ${0}")?;
//!
//! let mut registry = TranslationRegistry::new();
//! registry
//!     .add_language(Language::ENGLISH, &provider)?
//!     .choose_language(&Language::ENGLISH)?;
//!
//! let text = registry.translate(&TranslationKey::with_args("greet", ["World"]))?;
//! assert_eq!(text, "Hello World");
//! # Ok::<(), client_translation::i18n::TranslationError>(())
//! ```

mod catalog;
mod error;
mod key;
mod language;
mod metrics;
mod provider;
mod registry;
pub mod template;
mod validator;

pub use catalog::{LanguageCatalog, LanguageInfo};
pub use error::{ErrorKind, Result, TranslationError};
pub use key::{Arg, MultiKey, TranslationKey};
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use provider::{FrenchEnglishProvider, LanguageProvider, LanguageTable, TranslatedValue};
pub use registry::{RegistryState, Translatable, TranslationRegistry};
pub use validator::{TranslationValidator, ValidationReport};
