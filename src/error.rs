use thiserror::Error;

/// Errors raised by the registries, the catalogue, the route guard and the
/// session menu.
///
/// Route errors never reach an end user as an error body: route handling
/// turns them into a redirect to the not-found page. Catalogue errors stop
/// the process at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtlasError {
    #[error("Unsupported language code: '{0}'")]
    UnsupportedLocale(String),

    #[error("Unsupported country: '{0}'")]
    UnsupportedCountry(String),

    #[error("Unknown tool '{slug}' for {scope}")]
    UnknownTool { scope: String, slug: String },

    #[error("Duplicate tool name in catalogue: '{0}'")]
    DuplicateToolName(String),

    #[error("Duplicate tool slug '{slug}' in {scope}")]
    DuplicateToolSlug { scope: String, slug: String },

    #[error("Enriched tool '{name}' has slug '{slug}', expected '{expected}'")]
    SlugMismatch {
        name: String,
        slug: String,
        expected: String,
    },

    #[error("Enriched tool slug '{slug}' in {country} shadows base tool '{base}'")]
    ShadowedBaseTool {
        country: String,
        slug: String,
        base: String,
    },

    #[error("Country '{0}' has more than one enriched tool list")]
    DuplicateCountryEntry(String),

    #[error("Sign-out failed: {0}")]
    SignOut(String),

    #[error("Catalogue references a country missing from the geography registry: '{0}'")]
    UnknownCountry(String),
}

pub type AtlasResult<T> = std::result::Result<T, AtlasError>;
