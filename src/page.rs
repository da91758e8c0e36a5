//! Per-page UI state.
//!
//! Each page instance owns its menu and country selection. Both are reset
//! whenever the route parameters change, and the guard runs before the page
//! exposes anything renderable.

use crate::guard::{GuardState, RouteGuard, RouteParams};
use crate::i18n::{Language, TranslationSet, TranslationStore};
use crate::navigation::{self, Navigator, Resolution, SelectHandler};
use tracing::debug;

#[derive(Debug)]
pub struct PageState {
    params: Option<RouteParams>,
    guard_state: Option<GuardState>,
    menu_open: bool,
    selected_country: Option<String>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            params: None,
            guard_state: None,
            menu_open: false,
            selected_country: None,
        }
    }

    /// Apply new route parameters.
    ///
    /// Local state is reset first, then the guard decides. An invalid state
    /// sends `navigator` to the guard's redirect target.
    pub fn on_params_changed<N: Navigator + ?Sized>(
        &mut self,
        guard: &RouteGuard<'_>,
        params: RouteParams,
        navigator: &mut N,
    ) -> GuardState {
        self.menu_open = false;
        self.selected_country = params.country.clone();

        let state = guard.evaluate(&params);
        if let GuardState::Invalid { redirect_to } = state {
            navigator.navigate(redirect_to);
        }

        debug!("Page params changed to {:?}: {:?}", params, state);
        self.params = Some(params);
        self.guard_state = Some(state);
        state
    }

    /// The validated language, or `None` before a successful guard check.
    pub fn language(&self) -> Option<Language> {
        match self.guard_state {
            Some(GuardState::Valid(language)) => Some(language),
            _ => None,
        }
    }

    /// Strings for the current page. `None` until the guard has passed, so
    /// nothing renders under an unvalidated locale.
    pub fn translations(&self) -> Option<&'static TranslationSet> {
        self.language()
            .map(|language| TranslationStore::resolve(language.code()))
    }

    pub fn params(&self) -> Option<&RouteParams> {
        self.params.as_ref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selected_country.as_deref()
    }

    /// Pick a country from the selector and open its hub.
    pub fn select_country<N: Navigator + ?Sized>(&mut self, country: &str, navigator: &mut N) {
        let Some(language) = self.language() else {
            return;
        };
        self.selected_country = Some(country.to_string());
        navigator.navigate(&navigation::country_path(language, country));
    }

    /// Activate a tool card, scoped to the selected country if there is one.
    ///
    /// Returns `None` when the page has not passed the guard.
    pub fn select_tool<N: Navigator + ?Sized>(
        &self,
        tool_name: &str,
        navigator: &mut N,
        on_select: Option<SelectHandler<'_>>,
    ) -> Option<Resolution> {
        let language = self.language()?;
        Some(navigation::resolve(
            navigator,
            tool_name,
            language,
            self.selected_country.as_deref(),
            on_select,
        ))
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
