//! Query lifecycle of the search view.
//!
//! The host feeds one input-change event per edit into
//! [`SearchView::on_input`]; each event runs a complete search and
//! writes the resulting markup to the surface before returning.

use crate::core::config::Config;
use crate::core::render::markup::{render_view, LOAD_ERROR_HTML};
use crate::core::state::{AppState, AssetSource};

/// Display surface the view writes its markup into
pub trait ResultsSurface {
    fn set_html(&mut self, html: &str);
}

impl ResultsSurface for String {
    fn set_html(&mut self, html: &str) {
        self.clear();
        self.push_str(html);
    }
}

/// Whether the view could load what it needs
#[derive(Debug, Clone)]
pub enum ViewState {
    Ready(AppState),
    /// The index could not be loaded; the view ignores input
    Failed(String),
}

/// Search view bound to a results surface
pub struct SearchView<S: ResultsSurface> {
    state: ViewState,
    query: String,
    surface: S,
}

impl<S: ResultsSurface> SearchView<S> {
    /// Load state from `source` and render `initial_query` once
    ///
    /// The initial query is whatever the input already holds (a
    /// bookmarked or pre-filled search).
    pub async fn initialize(
        source: &dyn AssetSource,
        config: &Config,
        initial_query: &str,
        surface: S,
    ) -> Self {
        let state = match AppState::load(source, config).await {
            Ok(state) => ViewState::Ready(state),
            Err(e) => {
                if e.is_fatal_to_view() {
                    tracing::error!("Search view unavailable: {}", e);
                } else {
                    tracing::warn!("Search view failed to start: {}", e);
                }
                ViewState::Failed(e.message())
            }
        };

        Self::with_state(state, initial_query, surface)
    }

    /// Build a view over already-loaded state and render once
    pub fn with_state(state: ViewState, initial_query: &str, surface: S) -> Self {
        let mut view = Self {
            state,
            query: initial_query.to_string(),
            surface,
        };
        view.render();
        view
    }

    /// Handle one input-change event
    pub fn on_input(&mut self, query: &str) {
        if let ViewState::Failed(_) = self.state {
            return;
        }
        self.query.clear();
        self.query.push_str(query);
        self.render();
    }

    fn render(&mut self) {
        let html = match &self.state {
            ViewState::Ready(state) => render_view(state, &self.query),
            ViewState::Failed(_) => LOAD_ERROR_HTML.to_string(),
        };
        self.surface.set_html(&html);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ViewState::Ready(_))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
