//! Translation store: selects the string bundle for the active language.
//!
//! Fallback is whole-bundle. A language with a bundle gets that bundle
//! unchanged, partial or not. A language without one gets the default
//! (English) bundle. There is no per-key merge.

use crate::i18n::strings::{
    TranslationSet, ENGLISH_STRINGS, FRENCH_STRINGS, GERMAN_STRINGS, SPANISH_STRINGS,
};
use crate::metrics::RoutingMetrics;
use tracing::debug;

/// Every compiled-in bundle, keyed by language code.
static BUNDLES: &[(&str, &TranslationSet)] = &[
    ("en", &ENGLISH_STRINGS),
    ("de", &GERMAN_STRINGS),
    ("fr", &FRENCH_STRINGS),
    ("es", &SPANISH_STRINGS),
];

/// Lookup over the compiled-in translation bundles.
pub struct TranslationStore;

impl TranslationStore {
    /// The bundle registered for `code`, if any.
    pub fn bundle_for(code: &str) -> Option<&'static TranslationSet> {
        BUNDLES
            .iter()
            .find(|(bundle_code, _)| *bundle_code == code)
            .map(|&(_, bundle)| bundle)
    }

    /// The default-language bundle.
    pub fn default_bundle() -> &'static TranslationSet {
        &ENGLISH_STRINGS
    }

    /// Resolve the bundle to render for `code`. Never fails.
    pub fn resolve(code: &str) -> &'static TranslationSet {
        match Self::bundle_for(code) {
            Some(bundle) => bundle,
            None => {
                debug!("No translation bundle for '{}', using default bundle", code);
                RoutingMetrics::global().record_bundle_fallback();
                Self::default_bundle()
            }
        }
    }

    /// Codes that have a bundle of their own.
    pub fn bundled_codes() -> impl Iterator<Item = &'static str> {
        BUNDLES.iter().map(|&(code, _)| code)
    }
}
