//! Trait definitions for external interactions
//!
//! The renderer is consumed through this port only. Implementations live in
//! `milsym-render`.

use crate::RenderRequest;

/// Trait for symbol rendering
///
/// Given a natural-language unit description (or a symbol code), a style and
/// a variant-matching flag, return SVG markup as text, or fail if no symbol
/// can be resolved.
pub trait SymbolRenderer {
    /// Error type for render operations
    type Error;

    /// Short name of the renderer, for logs
    fn name(&self) -> &str;

    /// Render one symbol
    fn render(&self, request: &RenderRequest) -> Result<String, Self::Error>;
}

impl<R: SymbolRenderer + ?Sized> SymbolRenderer for &R {
    type Error = R::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&self, request: &RenderRequest) -> Result<String, Self::Error> {
        (**self).render(request)
    }
}
