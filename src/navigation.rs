//! Navigation resolver: turns a tool selection into a destination path.
//!
//! The resolver never checks the catalogue. A tool name that matches nothing
//! still produces a path; the route guard rejects it when the path is
//! requested. Resolution is synchronous and never fails.

use crate::i18n::Language;
use crate::metrics::RoutingMetrics;
use crate::slug::slugify;
use tracing::debug;

/// The "navigate to path" primitive of the surrounding router.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Caller-supplied replacement for navigation (e.g. opening a modal).
pub type SelectHandler<'a> = &'a dyn Fn(&str);

/// What the resolver did with a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The override handler was called; no navigation happened.
    Deferred,
    /// The navigator was sent to this path.
    Navigated(String),
}

/// Destination path for `tool_name` in `language`, optionally scoped to `country`.
///
/// * With a country: `/country/{lang}/{country}/{slug}`, the country segment
///   percent-encoded.
/// * Without: `/{lang}/{slug}`.
pub fn tool_path(tool_name: &str, language: Language, country: Option<&str>) -> String {
    let slug = slugify(tool_name);
    match country {
        Some(country) => format!(
            "/country/{}/{}/{}",
            language.code(),
            urlencoding::encode(country),
            slug
        ),
        None => format!("/{}/{}", language.code(), slug),
    }
}

/// Country hub path for `country` in `language`.
pub fn country_path(language: Language, country: &str) -> String {
    format!("/country/{}/{}", language.code(), urlencoding::encode(country))
}

/// Resolve a tool selection.
///
/// When `on_select` is given it is called with `tool_name` and the resolver
/// returns without touching `navigator`. Otherwise the destination is built
/// from the inputs alone and handed to `navigator`.
pub fn resolve<N: Navigator + ?Sized>(
    navigator: &mut N,
    tool_name: &str,
    language: Language,
    country: Option<&str>,
    on_select: Option<SelectHandler<'_>>,
) -> Resolution {
    if let Some(handler) = on_select {
        debug!("Tool '{}' selected, deferring to caller handler", tool_name);
        handler(tool_name);
        return Resolution::Deferred;
    }

    let path = tool_path(tool_name, language, country);
    debug!("Tool '{}' selected, navigating to {}", tool_name, path);
    navigator.navigate(&path);
    RoutingMetrics::global().record_navigation();
    Resolution::Navigated(path)
}

/// Navigator that records every path it is sent to.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    pub history: Vec<String>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, path: &str) {
        self.history.push(path.to_string());
    }
}
