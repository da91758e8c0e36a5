//! Translation coverage report - lists untranslated keys and broken
//! placeholders for every registered language
//!
//! Usage:
//!   cargo run --bin coverage            # Report every language
//!   cargo run --bin coverage -- fr      # Report one language
//!
//! Exits non-zero when any bundle has placeholder errors.

use anyhow::{bail, Result};
use calculator_atlas::i18n::{LanguageRegistry, TranslationStore, TranslationValidator};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("calculator_atlas=info".parse()?),
        )
        .init();

    let only = std::env::args().nth(1);
    let registry = LanguageRegistry::get();
    let reference = TranslationStore::default_bundle();

    if let Some(code) = &only {
        if registry.get_by_code(code).is_none() {
            bail!("Unknown language code: '{}'", code);
        }
    }

    let mut error_count = 0;
    for lang in registry.list() {
        if only.as_deref().is_some_and(|code| code != lang.code) {
            continue;
        }

        println!("== {} ({})", lang.name, lang.code);

        let Some(bundle) = TranslationStore::bundle_for(lang.code) else {
            println!("   no bundle, renders with the default language");
            continue;
        };

        let report = TranslationValidator::validate(reference, bundle);
        if report.is_clean() {
            println!("   complete");
        }
        for warning in &report.warnings {
            println!("   warning: {}", warning);
        }
        for error in &report.errors {
            println!("   error: {}", error);
        }
        error_count += report.errors.len();
    }

    if only.is_none() {
        for code in TranslationStore::bundled_codes() {
            if registry.get_by_code(code).is_none() {
                println!("== {} has a bundle but no registered language", code);
            }
        }
    }

    info!("Coverage check finished with {} errors", error_count);

    if error_count > 0 {
        bail!("{} placeholder errors found", error_count);
    }
    Ok(())
}
