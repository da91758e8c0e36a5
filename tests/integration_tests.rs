//! Integration tests for the calculator atlas
//!
//! These tests drive the complete HTTP router without binding a socket and
//! check the interaction of the guard, the translation store and the
//! navigation resolver end to end.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use calculator_atlas::{
    config::Config,
    i18n::{Language, LanguageRegistry, TranslationStore},
    navigation::{self, HistoryNavigator, Resolution},
    server::{self, AppState},
};
use serde_json::Value;
use std::cell::RefCell;
use tower::ServiceExt;

// ==================== Test Helpers ====================

fn create_test_app(quick_access_count: usize) -> Router {
    let config = Config {
        quick_access_count,
        ..Config::default()
    };
    server::router(AppState::new(config))
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("router should not fail")
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = get(app, uri).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, json)
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}

// ==================== Scenario A: registered language ====================

#[tokio::test]
async fn test_home_in_english_renders_english_bundle() {
    let (status, json) = get_json(create_test_app(8), "/en").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["language"], "en");
    assert_eq!(json["strings"]["nav"]["home"], "Home");
}

#[tokio::test]
async fn test_home_lists_registered_locales_in_order() {
    let (_, json) = get_json(create_test_app(8), "/de").await;

    let codes: Vec<_> = json["locales"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codes, vec!["en", "de", "fr", "es", "pt"]);
}

#[tokio::test]
async fn test_home_quick_access_uses_configured_count() {
    let (_, json) = get_json(create_test_app(3), "/es").await;

    let quick = json["quick_access"].as_array().unwrap();
    assert_eq!(quick.len(), 3);
    assert_eq!(quick[0]["name"], "Income Tax Calculator");
    assert_eq!(quick[1]["path"], "/es/payroll-tax-calculator");
}

#[tokio::test]
async fn test_unbundled_language_renders_default_strings() {
    let (status, json) = get_json(create_test_app(8), "/pt").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["language"], "pt");
    assert_eq!(json["strings"]["nav"]["home"], "Home");
}

#[tokio::test]
async fn test_partial_bundle_surfaces_empty_strings() {
    let (_, json) = get_json(create_test_app(8), "/fr").await;

    assert_eq!(json["strings"]["nav"]["home"], "Accueil");
    assert_eq!(json["strings"]["nav"]["about"], "");
}

// ==================== Scenario B: unregistered language ====================

#[tokio::test]
async fn test_unregistered_language_redirects_to_not_found() {
    let response = get(create_test_app(8), "/xx").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/404");
}

#[tokio::test]
async fn test_uppercase_language_redirects() {
    let response = get(create_test_app(8), "/EN").await;
    assert_eq!(location(&response), "/404");
}

#[tokio::test]
async fn test_every_registered_language_renders_home() {
    let app = create_test_app(8);
    for lang in LanguageRegistry::get().list() {
        let (status, json) = get_json(app.clone(), &format!("/{}", lang.code)).await;
        assert_eq!(status, StatusCode::OK, "{}", lang.code);
        assert_eq!(json["language"], lang.code);
    }
}

#[tokio::test]
async fn test_language_outside_registry_redirects() {
    let response = get(create_test_app(8), "/it").await;
    assert_eq!(location(&response), "/404");
}

#[tokio::test]
async fn test_unregistered_language_on_country_route_redirects() {
    let response = get(create_test_app(8), "/country/xx/Germany").await;
    assert_eq!(location(&response), "/404");
}

// ==================== Scenario C: unregistered country ====================

#[tokio::test]
async fn test_unregistered_country_redirects_despite_valid_language() {
    let response = get(create_test_app(8), "/country/de/Atlantis").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/404");
}

#[tokio::test]
async fn test_country_hub_for_enriched_country() {
    let (status, json) = get_json(create_test_app(8), "/country/de/Germany").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["country"], "Germany");
    assert_eq!(json["title"], "Steuerrechner für Germany");
    assert_eq!(json["enriched_tools"][0]["slug"], "income-tax-calculator");
    assert_eq!(
        json["enriched_tools"][0]["path"],
        "/country/de/Germany/income-tax-calculator"
    );
    assert_eq!(json["continents"], serde_json::json!(["europe"]));
}

#[tokio::test]
async fn test_country_hub_decodes_country_segment() {
    let (status, json) = get_json(create_test_app(8), "/country/en/United%20Kingdom").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["country"], "United Kingdom");
    assert_eq!(
        json["tools"][2]["path"],
        "/country/en/United%20Kingdom/vat-calculator"
    );
}

#[tokio::test]
async fn test_country_hub_without_enriched_tools() {
    let (status, json) = get_json(create_test_app(8), "/country/es/Kenya").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enriched_tools"], serde_json::json!([]));
}

#[tokio::test]
async fn test_transcontinental_country_hub_lists_both_continents() {
    let (_, json) = get_json(create_test_app(8), "/country/en/Turkey").await;
    assert_eq!(json["continents"], serde_json::json!(["europe", "asia"]));
}

// ==================== Tool Pages ====================

#[tokio::test]
async fn test_country_tool_page_with_details() {
    let (status, json) =
        get_json(create_test_app(8), "/country/en/United%20States/payroll-tax-calculator").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Payroll Tax Calculator");
    assert_eq!(json["details"]["complexity"], "advanced");
}

#[tokio::test]
async fn test_country_tool_page_for_base_tool() {
    let (status, json) = get_json(create_test_app(8), "/country/fr/Japan/vat-calculator").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "VAT Calculator");
    assert!(json["details"].is_null());
}

#[tokio::test]
async fn test_country_tool_page_unknown_slug_redirects() {
    let response = get(create_test_app(8), "/country/en/Germany/dog-tax").await;
    assert_eq!(location(&response), "/404");
}

#[tokio::test]
async fn test_language_tool_page() {
    let (status, json) = get_json(create_test_app(8), "/es/payroll-tax-calculator").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Payroll Tax Calculator");
    assert!(json["country"].is_null());
}

#[tokio::test]
async fn test_language_tool_page_unknown_slug_redirects() {
    let response = get(create_test_app(8), "/es/not-a-tool").await;
    assert_eq!(location(&response), "/404");
}

// ==================== Scenario D: navigation ====================

#[test]
fn test_resolver_builds_path_from_inputs() {
    let mut navigator = HistoryNavigator::new();
    let result = navigation::resolve(
        &mut navigator,
        "Payroll Tax Calculator",
        Language::from_code("es").unwrap(),
        Some("Germany"),
        None,
    );

    assert_eq!(
        result,
        Resolution::Navigated("/country/es/Germany/payroll-tax-calculator".to_string())
    );
}

#[tokio::test]
async fn test_navigate_endpoint_redirects_to_resolved_path() {
    let response = get(
        create_test_app(8),
        "/navigate?tool=Payroll%20Tax%20Calculator&lang=es&country=United%20States",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/country/es/United%20States/payroll-tax-calculator"
    );
}

#[tokio::test]
async fn test_navigated_path_is_served() {
    let app = create_test_app(8);
    let response = get(app.clone(), "/navigate?tool=VAT%20Calculator&lang=de").await;
    let target = location(&response).to_string();
    assert_eq!(target, "/de/vat-calculator");

    let (status, json) = get_json(app, &target).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "VAT Calculator");
}

#[tokio::test]
async fn test_navigate_to_unknown_tool_lands_on_not_found() {
    let app = create_test_app(8);
    let response = get(app.clone(), "/navigate?tool=Dog%20Tax&lang=en").await;
    let target = location(&response).to_string();
    assert_eq!(target, "/en/dog-tax");

    let response = get(app, &target).await;
    assert_eq!(location(&response), "/404");
}

#[tokio::test]
async fn test_navigation_by_name_reaches_country_details() {
    let app = create_test_app(8);
    for country in ["Germany", "United States", "United Kingdom", "India"] {
        let target = navigation::tool_path("Income Tax Calculator", Language::ENGLISH, Some(country));

        let (status, json) = get_json(app.clone(), &target).await;
        assert_eq!(status, StatusCode::OK, "{}", target);
        assert_eq!(json["country"], country);
        assert_eq!(json["details"]["name"], "Income Tax Calculator");
        assert!(json["details"]["description"].as_str().is_some_and(|d| !d.is_empty()));
    }
}

#[tokio::test]
async fn test_hub_links_for_enriched_tools_serve_details() {
    let app = create_test_app(8);
    let (_, hub) = get_json(app.clone(), "/country/en/United%20Kingdom").await;

    for link in hub["enriched_tools"].as_array().unwrap() {
        let path = link["path"].as_str().unwrap();
        let (status, json) = get_json(app.clone(), path).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert_eq!(json["details"]["slug"], link["slug"]);
    }
}

#[tokio::test]
async fn test_navigate_without_tool_redirects_to_not_found() {
    let response = get(create_test_app(8), "/navigate?lang=en").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/404");
}

#[tokio::test]
async fn test_navigate_without_parameters_redirects_to_not_found() {
    let response = get(create_test_app(8), "/navigate").await;
    assert_eq!(location(&response), "/404");
}

#[tokio::test]
async fn test_navigate_with_unregistered_language_redirects() {
    let response = get(create_test_app(8), "/navigate?tool=VAT%20Calculator&lang=xx").await;
    assert_eq!(location(&response), "/404");
}

// ==================== Scenario E: override handler ====================

#[test]
fn test_override_handler_replaces_navigation() {
    let mut navigator = HistoryNavigator::new();
    let calls = RefCell::new(Vec::new());
    let open_modal = |name: &str| calls.borrow_mut().push(name.to_string());

    let result = navigation::resolve(
        &mut navigator,
        "Payroll Tax Calculator",
        Language::ENGLISH,
        Some("Germany"),
        Some(&open_modal),
    );

    assert_eq!(result, Resolution::Deferred);
    assert!(navigator.history.is_empty());
    assert_eq!(*calls.borrow(), vec!["Payroll Tax Calculator".to_string()]);
}

// ==================== Other Routes ====================

#[tokio::test]
async fn test_not_found_page() {
    let (status, json) = get_json(create_test_app(8), "/404").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["title"],
        TranslationStore::default_bundle().errors.not_found_title
    );
    assert_eq!(json["home_path"], "/en");
}

#[tokio::test]
async fn test_unmatched_path_redirects_to_not_found() {
    let response = get(create_test_app(8), "/a/b/c/d/e").await;
    assert_eq!(location(&response), "/404");
}

#[tokio::test]
async fn test_root_redirects_to_default_language() {
    let response = get(create_test_app(8), "/").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/en");
}

#[tokio::test]
async fn test_health() {
    let response = get(create_test_app(8), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_metrics_reports_counters() {
    let app = create_test_app(8);
    get(app.clone(), "/xx").await;

    let (status, json) = get_json(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["redirects"].as_u64().unwrap() >= 1);
}
