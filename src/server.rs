//! HTTP surface: page routes answered with JSON page models, guard failures
//! answered with a redirect to the not-found page.

use crate::catalogue::{Catalogue, EnrichedTool};
use crate::config::Config;
use crate::geography::{Continent, GeographyRegistry};
use crate::guard::{GuardState, RouteGuard, RouteParams, NOT_FOUND_PATH};
use crate::i18n::{Language, LanguageConfig, LanguageRegistry, TranslationSet, TranslationStore};
use crate::metrics::{MetricsReport, RoutingMetrics};
use crate::navigation::{self, Navigator};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalogue: &'static Catalogue,
    pub geography: &'static GeographyRegistry,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            catalogue: Catalogue::get(),
            geography: GeographyRegistry::get(),
        }
    }

    fn guard(&self) -> RouteGuard<'static> {
        RouteGuard::new(self.catalogue, self.geography)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/navigate", get(navigate))
        .route("/404", get(not_found))
        .route("/:lang", get(home))
        .route("/:lang/:tool_slug", get(language_tool))
        .route("/country/:lang/:country", get(country_hub))
        .route("/country/:lang/:country/:tool_slug", get(country_tool))
        .fallback(unmatched)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ==================== Page Models ====================

#[derive(Debug, Serialize)]
pub struct ToolLink {
    pub name: &'static str,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub language: Language,
    pub locales: Vec<&'static LanguageConfig>,
    pub strings: &'static TranslationSet,
    pub quick_access: Vec<ToolLink>,
    pub continents: &'static [Continent],
}

/// An enriched tool with the path the resolver navigates to for it.
#[derive(Debug, Serialize)]
pub struct EnrichedToolLink {
    #[serde(flatten)]
    pub tool: &'static EnrichedTool,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct CountryHubPage {
    pub language: Language,
    pub country: String,
    pub title: String,
    pub continents: Vec<&'static str>,
    pub strings: &'static TranslationSet,
    pub enriched_tools: Vec<EnrichedToolLink>,
    pub tools: Vec<ToolLink>,
}

#[derive(Debug, Serialize)]
pub struct ToolPage {
    pub language: Language,
    pub country: Option<String>,
    pub name: &'static str,
    pub details: Option<&'static EnrichedTool>,
    pub strings: &'static TranslationSet,
}

#[derive(Debug, Serialize)]
pub struct NotFoundPage {
    pub title: &'static str,
    pub body: &'static str,
    pub back_home: &'static str,
    pub home_path: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    pub tool: String,
    pub lang: String,
    pub country: Option<String>,
}

/// Navigator answering the request with a `303 See Other`.
#[derive(Debug, Default)]
struct RedirectNavigator {
    target: Option<String>,
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, path: &str) {
        self.target = Some(path.to_string());
    }
}

fn redirect_not_found() -> Response {
    Redirect::temporary(NOT_FOUND_PATH).into_response()
}

/// Run the guard; `Err` carries the redirect response.
fn guarded(state: &AppState, params: &RouteParams) -> Result<Language, Response> {
    match state.guard().evaluate(params) {
        GuardState::Valid(language) => Ok(language),
        GuardState::Invalid { redirect_to } => Err(Redirect::temporary(redirect_to).into_response()),
    }
}

// ==================== Handlers ====================

async fn root(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&format!("/{}", state.config.default_language))
}

async fn health() -> &'static str {
    "OK"
}

async fn metrics() -> Json<MetricsReport> {
    Json(RoutingMetrics::global().report())
}

async fn home(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    let language = match guarded(&state, &RouteParams::home(&lang)) {
        Ok(language) => language,
        Err(redirect) => return redirect,
    };

    let quick_access = state
        .catalogue
        .first_n(state.config.quick_access_count)
        .iter()
        .map(|&name| ToolLink {
            name,
            path: navigation::tool_path(name, language, None),
        })
        .collect();

    Json(HomePage {
        language,
        locales: LanguageRegistry::get().list(),
        strings: TranslationStore::resolve(language.code()),
        quick_access,
        continents: state.geography.list_continents(),
    })
    .into_response()
}

async fn language_tool(
    State(state): State<AppState>,
    Path((lang, tool_slug)): Path<(String, String)>,
) -> Response {
    let language = match guarded(&state, &RouteParams::tool(&lang, None, &tool_slug)) {
        Ok(language) => language,
        Err(redirect) => return redirect,
    };

    // The guard has confirmed the slug names a base tool.
    let Some(name) = state.catalogue.find_base_by_slug(&tool_slug) else {
        return redirect_not_found();
    };

    Json(ToolPage {
        language,
        country: None,
        name,
        details: None,
        strings: TranslationStore::resolve(language.code()),
    })
    .into_response()
}

async fn country_hub(
    State(state): State<AppState>,
    Path((lang, country)): Path<(String, String)>,
) -> Response {
    let language = match guarded(&state, &RouteParams::country(&lang, &country)) {
        Ok(language) => language,
        Err(redirect) => return redirect,
    };

    let strings = TranslationStore::resolve(language.code());
    let enriched_tools = state
        .catalogue
        .list_enriched(&country)
        .iter()
        .map(|tool| EnrichedToolLink {
            tool,
            path: navigation::tool_path(tool.name, language, Some(&country)),
        })
        .collect();
    let tools = state
        .catalogue
        .list_base_tools()
        .iter()
        .map(|&name| ToolLink {
            name,
            path: navigation::tool_path(name, language, Some(&country)),
        })
        .collect();

    Json(CountryHubPage {
        language,
        title: strings.countries.hub_title.replace("{country}", &country),
        continents: state
            .geography
            .continents_of(&country)
            .iter()
            .map(|c| c.key)
            .collect(),
        strings,
        enriched_tools,
        tools,
        country,
    })
    .into_response()
}

async fn country_tool(
    State(state): State<AppState>,
    Path((lang, country, tool_slug)): Path<(String, String, String)>,
) -> Response {
    let language = match guarded(&state, &RouteParams::tool(&lang, Some(&country), &tool_slug)) {
        Ok(language) => language,
        Err(redirect) => return redirect,
    };

    let details = state.catalogue.find_enriched(&country, &tool_slug);
    let name = match details {
        Some(tool) => tool.name,
        None => match state.catalogue.find_base_by_slug(&tool_slug) {
            Some(name) => name,
            None => return redirect_not_found(),
        },
    };

    Json(ToolPage {
        language,
        country: Some(country),
        name,
        details,
        strings: TranslationStore::resolve(language.code()),
    })
    .into_response()
}

async fn navigate(query: Result<Query<NavigateQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(e) => {
            info!("Navigation request rejected: {}", e);
            return redirect_not_found();
        }
    };

    let language = match Language::from_code(&query.lang) {
        Ok(language) => language,
        Err(e) => {
            info!("Navigation request rejected: {}", e);
            return redirect_not_found();
        }
    };

    let mut navigator = RedirectNavigator::default();
    navigation::resolve(
        &mut navigator,
        &query.tool,
        language,
        query.country.as_deref(),
        None,
    );

    match navigator.target {
        Some(path) => Redirect::to(&path).into_response(),
        None => redirect_not_found(),
    }
}

async fn not_found(State(state): State<AppState>) -> Response {
    let strings = TranslationStore::default_bundle();
    let page = NotFoundPage {
        title: strings.errors.not_found_title,
        body: strings.errors.not_found_body,
        back_home: strings.errors.back_home,
        home_path: format!("/{}", state.config.default_language),
    };
    (StatusCode::NOT_FOUND, Json(page)).into_response()
}

async fn unmatched() -> Response {
    redirect_not_found()
}
