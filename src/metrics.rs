//! Routing metrics: counters for guard decisions, navigations and
//! translation-bundle fallbacks, served by `/metrics`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

pub struct RoutingMetrics {
    /// Route parameter sets that passed the guard
    valid_routes: AtomicUsize,

    /// Route parameter sets redirected to the not-found page
    redirects: AtomicUsize,

    /// Selections the resolver turned into a navigation
    navigations: AtomicUsize,

    /// Bundle lookups answered with the default bundle
    bundle_fallbacks: AtomicUsize,
}

static METRICS: OnceLock<RoutingMetrics> = OnceLock::new();

impl RoutingMetrics {
    pub fn new() -> Self {
        Self {
            valid_routes: AtomicUsize::new(0),
            redirects: AtomicUsize::new(0),
            navigations: AtomicUsize::new(0),
            bundle_fallbacks: AtomicUsize::new(0),
        }
    }

    /// Get the process-wide metrics instance.
    pub fn global() -> &'static RoutingMetrics {
        METRICS.get_or_init(RoutingMetrics::new)
    }

    pub fn record_valid_route(&self) {
        self.valid_routes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_redirect(&self) {
        self.redirects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_navigation(&self) {
        self.navigations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_bundle_fallback(&self) {
        self.bundle_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn valid_routes(&self) -> usize {
        self.valid_routes.load(Ordering::Relaxed)
    }

    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::Relaxed)
    }

    pub fn navigations(&self) -> usize {
        self.navigations.load(Ordering::Relaxed)
    }

    pub fn bundle_fallbacks(&self) -> usize {
        self.bundle_fallbacks.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> MetricsReport {
        let valid = self.valid_routes();
        let redirects = self.redirects();
        let total = valid + redirects;
        let redirect_rate = if total > 0 {
            (redirects as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            valid_routes: valid,
            redirects,
            redirect_rate,
            navigations: self.navigations(),
            bundle_fallbacks: self.bundle_fallbacks(),
        }
    }
}

impl Default for RoutingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub valid_routes: usize,
    pub redirects: usize,

    /// Share of guarded requests redirected, as a percentage (0-100)
    pub redirect_rate: f64,

    pub navigations: usize,
    pub bundle_fallbacks: usize,
}
