//! Tool catalogue: the ordered list of calculator names, plus per-country
//! elaborations for countries with deep support.
//!
//! Display order is insertion order. Quick-access surfaces take the first
//! `n` entries, with `n` supplied by configuration.

use crate::error::{AtlasError, AtlasResult};
use crate::geography::GeographyRegistry;
use crate::slug::slugify;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

/// A tool elaborated for one country. Identity is `(country, name)`.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedTool {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub complexity: Complexity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<&'static str>,
}

pub struct Catalogue {
    base_tools: Vec<&'static str>,
    enriched: Vec<(&'static str, Vec<EnrichedTool>)>,
}

static CATALOGUE: OnceLock<Catalogue> = OnceLock::new();

impl Catalogue {
    /// The shipped catalogue.
    pub fn get() -> &'static Catalogue {
        CATALOGUE.get_or_init(|| Catalogue::new(default_base_tools(), default_enriched()))
    }

    pub fn new(
        base_tools: Vec<&'static str>,
        enriched: Vec<(&'static str, Vec<EnrichedTool>)>,
    ) -> Self {
        Self {
            base_tools,
            enriched,
        }
    }

    pub fn list_base_tools(&self) -> &[&'static str] {
        &self.base_tools
    }

    /// The first `n` base tools, or all of them when `n` exceeds the list.
    pub fn first_n(&self, n: usize) -> &[&'static str] {
        &self.base_tools[..n.min(self.base_tools.len())]
    }

    /// Tools elaborated for `country`. Empty when the country has none.
    pub fn list_enriched(&self, country: &str) -> &[EnrichedTool] {
        self.enriched
            .iter()
            .find(|(name, _)| *name == country)
            .map(|(_, tools)| tools.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_enriched(&self, country: &str, slug: &str) -> Option<&EnrichedTool> {
        self.list_enriched(country).iter().find(|t| t.slug == slug)
    }

    /// The base tool whose slug is `slug`.
    pub fn find_base_by_slug(&self, slug: &str) -> Option<&'static str> {
        self.base_tools
            .iter()
            .copied()
            .find(|name| slugify(name) == slug)
    }

    /// Whether `slug` names a tool page for `country`: either one of its
    /// enriched tools or a base tool.
    pub fn has_tool(&self, country: &str, slug: &str) -> bool {
        self.find_enriched(country, slug).is_some() || self.find_base_by_slug(slug).is_some()
    }

    /// Check catalogue integrity. Called once at startup; any failure stops
    /// the process rather than leaving navigation ambiguous at runtime.
    pub fn validate(&self) -> AtlasResult<()> {
        let mut names = HashSet::new();
        let mut slugs = HashSet::new();
        for name in &self.base_tools {
            if !names.insert(*name) {
                return Err(AtlasError::DuplicateToolName(name.to_string()));
            }
            let slug = slugify(name);
            if !slugs.insert(slug.clone()) {
                return Err(AtlasError::DuplicateToolSlug {
                    scope: "base catalogue".to_string(),
                    slug,
                });
            }
        }

        let geography = GeographyRegistry::get();
        let mut countries = HashSet::new();
        for (country, tools) in &self.enriched {
            if !geography.contains_country(country) {
                return Err(AtlasError::UnknownCountry(country.to_string()));
            }
            if !countries.insert(*country) {
                return Err(AtlasError::DuplicateCountryEntry(country.to_string()));
            }

            let mut names = HashSet::new();
            let mut slugs = HashSet::new();
            for tool in tools {
                if let Some(base) = self.find_base_by_slug(tool.slug) {
                    if base != tool.name {
                        return Err(AtlasError::ShadowedBaseTool {
                            country: country.to_string(),
                            slug: tool.slug.to_string(),
                            base: base.to_string(),
                        });
                    }
                }
                let expected = slugify(tool.name);
                if tool.slug != expected {
                    return Err(AtlasError::SlugMismatch {
                        name: tool.name.to_string(),
                        slug: tool.slug.to_string(),
                        expected,
                    });
                }
                if !names.insert(tool.name) {
                    return Err(AtlasError::DuplicateToolName(format!(
                        "{} ({})",
                        tool.name, country
                    )));
                }
                if !slugs.insert(tool.slug) {
                    return Err(AtlasError::DuplicateToolSlug {
                        scope: country.to_string(),
                        slug: tool.slug.to_string(),
                    });
                }
            }
        }

        info!(
            "Catalogue valid: {} base tools, {} countries with enriched tools",
            self.base_tools.len(),
            self.enriched.len()
        );
        Ok(())
    }
}

fn default_base_tools() -> Vec<&'static str> {
    vec![
        "Income Tax Calculator",
        "Payroll Tax Calculator",
        "VAT Calculator",
        "Sales Tax Calculator",
        "Property Tax Calculator",
        "Capital Gains Tax Calculator",
        "Corporate Tax Calculator",
        "Self-Employment Tax Calculator",
        "Inheritance Tax Calculator",
        "Pension Contribution Calculator",
        "Import Duty Calculator",
        "Social Security Calculator",
    ]
}

fn default_enriched() -> Vec<(&'static str, Vec<EnrichedTool>)> {
    vec![
        (
            "United States",
            vec![
                EnrichedTool {
                    name: "Income Tax Calculator",
                    slug: "income-tax-calculator",
                    description: "Federal income tax by filing status and bracket.",
                    category: "Income",
                    complexity: Complexity::Intermediate,
                    features: vec!["Filing status", "Standard deduction", "Bracket breakdown"],
                },
                EnrichedTool {
                    name: "Payroll Tax Calculator",
                    slug: "payroll-tax-calculator",
                    description: "FICA, Medicare and federal withholding per pay period.",
                    category: "Employment",
                    complexity: Complexity::Advanced,
                    features: vec!["Social Security cap", "Additional Medicare tax"],
                },
                EnrichedTool {
                    name: "Sales Tax Calculator",
                    slug: "sales-tax-calculator",
                    description: "State and local sales tax on a purchase.",
                    category: "Consumption",
                    complexity: Complexity::Basic,
                    features: vec![],
                },
            ],
        ),
        (
            "Germany",
            vec![
                EnrichedTool {
                    name: "Income Tax Calculator",
                    slug: "income-tax-calculator",
                    description: "Einkommensteuer with solidarity surcharge and church tax.",
                    category: "Income",
                    complexity: Complexity::Advanced,
                    features: vec!["Solidaritätszuschlag", "Kirchensteuer", "Splitting"],
                },
                EnrichedTool {
                    name: "VAT Calculator",
                    slug: "vat-calculator",
                    description: "Umsatzsteuer at the standard and reduced rates.",
                    category: "Consumption",
                    complexity: Complexity::Basic,
                    features: vec!["19% standard rate", "7% reduced rate"],
                },
            ],
        ),
        (
            "United Kingdom",
            vec![
                EnrichedTool {
                    name: "Income Tax Calculator",
                    slug: "income-tax-calculator",
                    description: "PAYE income tax and National Insurance.",
                    category: "Income",
                    complexity: Complexity::Intermediate,
                    features: vec!["Personal allowance taper", "Scottish rates"],
                },
                EnrichedTool {
                    name: "Inheritance Tax Calculator",
                    slug: "inheritance-tax-calculator",
                    description: "Inheritance tax above the nil-rate band.",
                    category: "Wealth",
                    complexity: Complexity::Intermediate,
                    features: vec!["Residence nil-rate band"],
                },
            ],
        ),
        (
            "India",
            vec![EnrichedTool {
                name: "Income Tax Calculator",
                slug: "income-tax-calculator",
                description: "Old and new regime comparison.",
                category: "Income",
                complexity: Complexity::Intermediate,
                features: vec!["Regime comparison", "Section 80C deductions"],
            }],
        ),
    ]
}
