//! Symbol Renderer Layer
//!
//! Pluggable implementations of the `SymbolRenderer` port from `milsym-domain`.
//!
//! # Architecture
//!
//! Symbol name resolution and SVG construction are owned by an external
//! library. This crate only adapts that library to the port, so the batch
//! generator never depends on a particular renderer API.
//!
//! # Renderers
//!
//! - `MockRenderer`: Deterministic mock for testing
//! - `CommandRenderer`: Runs an external rendering program per symbol
//!
//! # Examples
//!
//! ```
//! use milsym_render::MockRenderer;
//! use milsym_domain::traits::SymbolRenderer;
//! use milsym_domain::{RenderRequest, SymbolStyle};
//!
//! let renderer = MockRenderer::new();
//! let request = RenderRequest::new("friendly infantry", SymbolStyle::Medium, true);
//! let svg = renderer.render(&request).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

#![warn(missing_docs)]

pub mod command;

use milsym_domain::traits::SymbolRenderer;
use milsym_domain::RenderRequest;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use command::{CommandRenderer, CommandRendererConfig};

/// Errors that can occur while rendering a symbol
#[derive(Error, Debug)]
pub enum RenderError {
    /// The query did not resolve to any known symbol
    #[error("No symbol matches '{0}'")]
    NoSymbol(String),

    /// The renderer program could not be started
    #[error("Failed to launch renderer: {0}")]
    Launch(String),

    /// The renderer program exited unsuccessfully
    #[error("Renderer exited with {status}: {detail}")]
    Failed {
        /// Exit status description
        status: String,
        /// Last diagnostic line from the renderer
        detail: String,
    },

    /// The renderer produced something that is not SVG text
    #[error("Invalid renderer output: {0}")]
    InvalidOutput(String),
}

/// Mock renderer for deterministic testing
///
/// Returns a small SVG document per query without touching any external
/// program. Specific queries can be mapped to fixed markup or to a failure.
///
/// # Examples
///
/// ```
/// use milsym_render::MockRenderer;
/// use milsym_domain::traits::SymbolRenderer;
/// use milsym_domain::{RenderRequest, SymbolStyle};
///
/// let mut renderer = MockRenderer::new();
/// renderer.add_failure("enemy dragon");
///
/// let ok = RenderRequest::new("enemy armor", SymbolStyle::Medium, true);
/// let bad = RenderRequest::new("enemy dragon", SymbolStyle::Medium, true);
/// assert!(renderer.render(&ok).is_ok());
/// assert!(renderer.render(&bad).is_err());
/// assert_eq!(renderer.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockRenderer {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<RenderRequest>>>,
}

#[derive(Debug, Clone)]
enum MockResponse {
    Markup(String),
    Failure,
}

impl MockRenderer {
    /// Create a mock that renders every query with the default template
    pub fn new() -> Self {
        Self::default()
    }

    /// Return fixed markup for a specific query
    pub fn add_response(&mut self, query: impl Into<String>, markup: impl Into<String>) {
        self.lock_responses()
            .insert(query.into(), MockResponse::Markup(markup.into()));
    }

    /// Fail with `RenderError::NoSymbol` for a specific query
    pub fn add_failure(&mut self, query: impl Into<String>) {
        self.lock_responses()
            .insert(query.into(), MockResponse::Failure);
    }

    /// Number of render calls so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Every request received so far, in call order
    pub fn requests(&self) -> Vec<RenderRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Markup produced for a query when no response is configured
    pub fn default_markup(request: &RenderRequest) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.2" "#,
                r#"width="60" height="60" data-query="{}" data-style="{}">"#,
                r#"<rect x="5" y="5" width="50" height="50"/></svg>"#
            ),
            request.query, request.style
        )
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, HashMap<String, MockResponse>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SymbolRenderer for MockRenderer {
    type Error = RenderError;

    fn name(&self) -> &str {
        "mock"
    }

    fn render(&self, request: &RenderRequest) -> Result<String, Self::Error> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match self.lock_responses().get(&request.query) {
            Some(MockResponse::Markup(markup)) => Ok(markup.clone()),
            Some(MockResponse::Failure) => Err(RenderError::NoSymbol(request.query.clone())),
            None => Ok(Self::default_markup(request)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milsym_domain::SymbolStyle;

    fn request(query: &str) -> RenderRequest {
        RenderRequest::new(query, SymbolStyle::Medium, true)
    }

    #[test]
    fn test_mock_renderer_default() {
        let renderer = MockRenderer::new();
        let svg = renderer.render(&request("friendly infantry")).unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"data-query="friendly infantry""#));
        assert!(svg.contains(r#"data-style="medium""#));
    }

    #[test]
    fn test_mock_renderer_specific_responses() {
        let mut renderer = MockRenderer::new();
        renderer.add_response("enemy armor", "<svg id=\"tank\"/>");

        assert_eq!(renderer.render(&request("enemy armor")).unwrap(), "<svg id=\"tank\"/>");
        assert!(renderer.render(&request("enemy mortar")).unwrap().contains("enemy mortar"));
    }

    #[test]
    fn test_mock_renderer_failure() {
        let mut renderer = MockRenderer::new();
        renderer.add_failure("enemy dragon");

        let result = renderer.render(&request("enemy dragon"));
        assert!(matches!(result, Err(RenderError::NoSymbol(q)) if q == "enemy dragon"));
    }

    #[test]
    fn test_mock_renderer_records_requests() {
        let renderer = MockRenderer::new();
        renderer.render(&request("a")).unwrap();
        renderer.render(&request("b")).unwrap();

        let queries: Vec<_> = renderer.requests().into_iter().map(|r| r.query).collect();
        assert_eq!(queries, vec!["a", "b"]);
        assert_eq!(renderer.call_count(), 2);
    }

    #[test]
    fn test_mock_renderer_clone_shares_state() {
        let renderer1 = MockRenderer::new();
        let renderer2 = renderer1.clone();

        renderer1.render(&request("test")).unwrap();

        assert_eq!(renderer1.call_count(), 1);
        assert_eq!(renderer2.call_count(), 1);
    }
}
