//! Error type shared by every translation operation.

use crate::i18n::Language;

/// Coarse classification of a [`TranslationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input was missing or malformed.
    InvalidArgument,
    /// A language or a translation key could not be found.
    NotFound,
    /// The operation needs an active language and none was chosen.
    InvalidState,
}

/// Errors raised by key construction, providers and the registry.
///
/// Errors are returned at the call that introduced the bad value and are
/// never retried or swallowed internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unexisting language: {0}")]
    LanguageNotFound(Language),

    #[error("{key} translation does not exist")]
    TranslationNotFound { key: String },

    #[error("No active language has been chosen")]
    NoActiveLanguage,
}

impl TranslationError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::LanguageNotFound(_) | Self::TranslationNotFound { .. } => ErrorKind::NotFound,
            Self::NoActiveLanguage => ErrorKind::InvalidState,
        }
    }
}

/// Result alias used throughout the `i18n` module.
pub type Result<T> = std::result::Result<T, TranslationError>;
