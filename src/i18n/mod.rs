//! Internationalization (i18n) module for UI languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported UI languages
//! - `language`: Validated `Language` type, only constructible from registered codes
//! - `strings`: Compiled-in translation bundles and their dotted key schema
//! - `store`: Bundle selection with whole-bundle fallback to the default language
//! - `validator`: Coverage checks of a bundle against the default bundle
//!
//! # Example
//!
//! ```rust
//! use calculator_atlas::i18n::{Language, TranslationStore};
//!
//! let german = Language::from_code("de").unwrap();
//! let strings = TranslationStore::resolve(german.code());
//! assert_eq!(strings.nav.home, "Startseite");
//! ```

mod language;
mod registry;
mod store;
pub mod strings;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use store::TranslationStore;
pub use strings::TranslationSet;
pub use validator::{TranslationValidator, ValidationReport};
