//! Geography registry: continents and the ordered countries they list.
//!
//! Countries are plain display names, matched exactly. The registry does not
//! enforce that a country belongs to a single continent; transcontinental
//! countries are listed under each continent they span.

use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize)]
pub struct Continent {
    /// Stable key (e.g., "europe")
    pub key: &'static str,

    /// Display name (e.g., "Europe")
    pub name: &'static str,

    /// Styling hint for the presentation layer (card gradient class)
    pub presentation_hint: &'static str,

    /// Countries in display order
    pub countries: Vec<&'static str>,
}

pub struct GeographyRegistry {
    continents: Vec<Continent>,
}

static REGISTRY: OnceLock<GeographyRegistry> = OnceLock::new();

impl GeographyRegistry {
    pub fn get() -> &'static GeographyRegistry {
        REGISTRY.get_or_init(|| GeographyRegistry {
            continents: default_continents(),
        })
    }

    /// Look up a continent by its exact key.
    pub fn continent(&self, key: &str) -> Option<&Continent> {
        self.continents.iter().find(|c| c.key == key)
    }

    /// All continents in display order.
    pub fn list_continents(&self) -> &[Continent] {
        &self.continents
    }

    /// Whether any continent lists `country` (exact, case-sensitive).
    pub fn contains_country(&self, country: &str) -> bool {
        self.continents
            .iter()
            .any(|c| c.countries.iter().any(|name| *name == country))
    }

    /// Every continent listing `country`, in display order.
    pub fn continents_of(&self, country: &str) -> Vec<&Continent> {
        self.continents
            .iter()
            .filter(|c| c.countries.contains(&country))
            .collect()
    }
}

fn default_continents() -> Vec<Continent> {
    vec![
        Continent {
            key: "europe",
            name: "Europe",
            presentation_hint: "from-blue-500 to-indigo-600",
            countries: vec![
                "Germany",
                "France",
                "Spain",
                "United Kingdom",
                "Italy",
                "Netherlands",
                "Portugal",
                "Switzerland",
                "Russia",
                "Turkey",
            ],
        },
        Continent {
            key: "north-america",
            name: "North America",
            presentation_hint: "from-red-500 to-orange-500",
            countries: vec!["United States", "Canada", "Mexico"],
        },
        Continent {
            key: "south-america",
            name: "South America",
            presentation_hint: "from-green-500 to-emerald-600",
            countries: vec!["Brazil", "Argentina", "Chile", "Colombia"],
        },
        Continent {
            key: "asia",
            name: "Asia",
            presentation_hint: "from-yellow-400 to-red-500",
            countries: vec!["Japan", "India", "Singapore", "China", "Russia", "Turkey"],
        },
        Continent {
            key: "africa",
            name: "Africa",
            presentation_hint: "from-amber-500 to-yellow-600",
            countries: vec!["South Africa", "Nigeria", "Kenya", "Egypt"],
        },
        Continent {
            key: "oceania",
            name: "Oceania",
            presentation_hint: "from-cyan-500 to-blue-500",
            countries: vec!["Australia", "New Zealand"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continent_lookup_by_key() {
        let europe = GeographyRegistry::get()
            .continent("europe")
            .expect("europe registered");
        assert_eq!(europe.name, "Europe");
        assert_eq!(europe.countries[0], "Germany");
    }

    #[test]
    fn test_continent_lookup_unknown_key() {
        assert!(GeographyRegistry::get().continent("atlantis").is_none());
        assert!(GeographyRegistry::get().continent("Europe").is_none());
    }

    #[test]
    fn test_continent_keys_are_unique() {
        let continents = GeographyRegistry::get().list_continents();
        let mut keys: Vec<_> = continents.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), continents.len());
    }

    #[test]
    fn test_country_order_is_preserved() {
        let oceania = GeographyRegistry::get().continent("oceania").unwrap();
        assert_eq!(oceania.countries, vec!["Australia", "New Zealand"]);
    }

    #[test]
    fn test_contains_country_exact_match() {
        let registry = GeographyRegistry::get();
        assert!(registry.contains_country("Germany"));
        assert!(registry.contains_country("United States"));
        assert!(!registry.contains_country("germany"));
        assert!(!registry.contains_country("Germany "));
        assert!(!registry.contains_country("Atlantis"));
    }

    #[test]
    fn test_transcontinental_country_listed_twice() {
        let keys: Vec<_> = GeographyRegistry::get()
            .continents_of("Russia")
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(keys, vec!["europe", "asia"]);
    }

    #[test]
    fn test_continents_of_unknown_country_is_empty() {
        assert!(GeographyRegistry::get().continents_of("Atlantis").is_empty());
    }
}
