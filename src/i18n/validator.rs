//! Cross-language consistency validation.
//!
//! Compares every language added to a registry against a reference
//! language: keys and placeholders of the reference should be present in
//! every translation.

use crate::i18n::{template, Language, Result, TranslationError, TranslationRegistry};

/// Validation report containing errors and warnings about the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys missing from a translation
    pub errors: Vec<String>,

    /// Placeholder mismatches and keys unknown to the reference
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for multi-language consistency.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Validate every language of `registry` against `reference`.
    ///
    /// This function checks that, for each other language:
    /// - every reference key is translated (error otherwise)
    /// - each translation uses the same placeholder indices (warning otherwise)
    /// - no key exists that the reference lacks (warning otherwise)
    ///
    /// Messages are sorted so reports are stable.
    ///
    /// # Errors
    /// `LanguageNotFound` if `reference` was never added to the registry.
    pub fn validate(
        registry: &TranslationRegistry,
        reference: &Language,
    ) -> Result<ValidationReport> {
        let reference_table = registry
            .table(reference)
            .ok_or_else(|| TranslationError::LanguageNotFound(reference.clone()))?;

        let mut report = ValidationReport::new();

        for language in registry.languages().filter(|l| *l != reference) {
            let Some(table) = registry.table(language) else {
                continue;
            };

            for (key, expected) in reference_table.iter() {
                match table.get(key) {
                    None => report
                        .errors
                        .push(format!("[{}] missing translation for '{}'", language, key)),
                    Some(translated) => {
                        let expected = template::placeholders(expected);
                        let found = template::placeholders(translated);
                        if expected != found {
                            report.warnings.push(format!(
                                "[{}] placeholder mismatch for '{}': {} has {:?}, translation has {:?}",
                                language, key, reference, expected, found
                            ));
                        }
                    }
                }
            }

            for key in table.keys().filter(|k| !reference_table.contains_key(k)) {
                report.warnings.push(format!(
                    "[{}] key '{}' is not defined in {}",
                    language, key, reference
                ));
            }
        }

        report.errors.sort();
        report.warnings.sort();
        Ok(report)
    }
}
