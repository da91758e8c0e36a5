//! Route guard: decides whether route parameters may render or must redirect.
//!
//! Membership checks are exact and case-sensitive. Any normalization of
//! incoming codes has to happen before the guard, never inside it.

use crate::catalogue::Catalogue;
use crate::error::{AtlasError, AtlasResult};
use crate::geography::GeographyRegistry;
use crate::i18n::Language;
use crate::metrics::RoutingMetrics;
use tracing::warn;

/// Target of every failed guard check.
pub const NOT_FOUND_PATH: &str = "/404";

/// Parameters parsed from a request path. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParams {
    pub lang: String,
    pub country: Option<String>,
    pub tool_slug: Option<String>,
}

impl RouteParams {
    pub fn home(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            country: None,
            tool_slug: None,
        }
    }

    pub fn country(lang: &str, country: &str) -> Self {
        Self {
            lang: lang.to_string(),
            country: Some(country.to_string()),
            tool_slug: None,
        }
    }

    pub fn tool(lang: &str, country: Option<&str>, tool_slug: &str) -> Self {
        Self {
            lang: lang.to_string(),
            country: country.map(str::to_string),
            tool_slug: Some(tool_slug.to_string()),
        }
    }

    pub fn is_country_scoped(&self) -> bool {
        self.country.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Valid(Language),
    Invalid { redirect_to: &'static str },
}

impl GuardState {
    pub fn is_valid(&self) -> bool {
        matches!(self, GuardState::Valid(_))
    }
}

pub struct RouteGuard<'a> {
    catalogue: &'a Catalogue,
    geography: &'a GeographyRegistry,
}

impl<'a> RouteGuard<'a> {
    pub fn new(catalogue: &'a Catalogue, geography: &'a GeographyRegistry) -> Self {
        Self {
            catalogue,
            geography,
        }
    }

    /// Run every check in order, stopping at the first failure.
    ///
    /// 1. `lang` must be a registered language.
    /// 2. On country-scoped routes, `country` must be in the geography registry.
    /// 3. On tool routes, the slug must name a tool for the scope.
    pub fn check(&self, params: &RouteParams) -> AtlasResult<Language> {
        let language = Language::from_code(&params.lang)?;

        if let Some(country) = &params.country {
            if !self.geography.contains_country(country) {
                return Err(AtlasError::UnsupportedCountry(country.clone()));
            }
        }

        if let Some(slug) = &params.tool_slug {
            let known = match &params.country {
                Some(country) => self.catalogue.has_tool(country, slug),
                None => self.catalogue.find_base_by_slug(slug).is_some(),
            };
            if !known {
                return Err(AtlasError::UnknownTool {
                    scope: params
                        .country
                        .clone()
                        .unwrap_or_else(|| "base catalogue".to_string()),
                    slug: slug.clone(),
                });
            }
        }

        Ok(language)
    }

    /// Evaluate `params` into a guard state, logging the reason for a redirect.
    pub fn evaluate(&self, params: &RouteParams) -> GuardState {
        match self.check(params) {
            Ok(language) => {
                RoutingMetrics::global().record_valid_route();
                GuardState::Valid(language)
            }
            Err(e) => {
                RoutingMetrics::global().record_redirect();
                warn!("Route guard redirecting to {}: {}", NOT_FOUND_PATH, e);
                GuardState::Invalid {
                    redirect_to: NOT_FOUND_PATH,
                }
            }
        }
    }
}

impl Default for RouteGuard<'static> {
    fn default() -> Self {
        Self::new(Catalogue::get(), GeographyRegistry::get())
    }
}
