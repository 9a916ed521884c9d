use anyhow::{Context, Result};
use client_translation::config::Config;
use client_translation::i18n::{TranslationKey, TranslationRegistry, TranslationValidator};
use client_translation::resources;
use tracing::{info, warn};

/// Parse `key` or `key:arg1,arg2` into a translation key.
///
/// Nothing after the `:` means no arguments. A leading `:` leaves the key
/// empty, so the line prints as an empty string.
fn parse_key(raw: &str) -> TranslationKey {
    match raw.split_once(':') {
        Some((key, "")) => TranslationKey::new(key),
        Some((key, args)) => TranslationKey::with_args(key, args.split(',')),
        None => TranslationKey::new(raw),
    }
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("client_translation=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let path = config
        .translations_file
        .as_deref()
        .context("TRANSLATION_FILE not set")?;

    let values = resources::load_translated_values(path)?;
    let (provider, languages) = resources::build_provider(values)?;

    let mut registry = TranslationRegistry::new();
    for language in &languages {
        registry.add_language(language.clone(), &provider)?;
    }
    registry
        .choose_language(&config.locale)
        .with_context(|| format!("Locale {} is not present in {}", config.locale, path))?;

    info!(
        "Translating in {} ({} languages loaded)",
        config.locale,
        languages.len()
    );

    let report = TranslationValidator::validate(&registry, &config.locale)?;
    for error in &report.errors {
        warn!("{}", error);
    }
    for warning in &report.warnings {
        warn!("{}", warning);
    }

    for raw in std::env::args().skip(1) {
        println!("{}", registry.translate_or_key(&parse_key(&raw)));
    }

    Ok(())
}
