//! Locale-aware tool resolution and navigation for a multi-country catalogue
//! of government tax calculators.
//!
//! Static registries (languages, continents and countries, tools) feed a
//! translation store, a navigation resolver and a route guard. The `server`
//! module exposes them over HTTP.

pub mod catalogue;
pub mod config;
pub mod error;
pub mod geography;
pub mod guard;
pub mod i18n;
pub mod metrics;
pub mod navigation;
pub mod page;
pub mod server;
pub mod session;
pub mod slug;

pub use error::{AtlasError, AtlasResult};
