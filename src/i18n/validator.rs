//! Translation coverage validation.
//!
//! Compares a bundle against the default bundle and reports untranslated
//! keys and broken placeholders. This is a reporting tool only: bundles are
//! never patched from its findings.

use crate::i18n::strings::TranslationSet;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Translated strings whose placeholders differ from the default
    pub errors: Vec<String>,

    /// Keys that are not translated yet
    pub warnings: Vec<String>,
}

impl ValidationReport {
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

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation bundles.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate `bundle` against the `reference` bundle.
    ///
    /// Empty values are reported as warnings. A translated value whose
    /// `{placeholder}` set differs from the reference is an error, since the
    /// rendering layer would substitute into the wrong template.
    pub fn validate(reference: &TranslationSet, bundle: &TranslationSet) -> ValidationReport {
        let mut report = ValidationReport::new();

        for ((key, expected), (_, actual)) in reference.entries().into_iter().zip(bundle.entries())
        {
            if actual.is_empty() {
                report.warnings.push(format!("Missing translation: {}", key));
                continue;
            }

            let expected_placeholders = Self::extract_placeholders(expected);
            let actual_placeholders = Self::extract_placeholders(actual);
            if expected_placeholders != actual_placeholders {
                report.errors.push(format!(
                    "Placeholder mismatch in {}: expected {:?}, found {:?}",
                    key, expected_placeholders, actual_placeholders
                ));
            }
        }

        report
    }

    /// Extract the set of `{name}` placeholders from a template
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
